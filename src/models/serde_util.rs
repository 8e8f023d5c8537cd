//! Custom serde helpers for the gateway's wire formats.
//!
//! The gateway is loose about scalar types: the same field may arrive as a
//! JSON number in one response and as a string in the next. These helpers
//! accept both.

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// String, accepting numbers.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?.into_string())
}

/// Optional string, accepting numbers.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Optional integer, accepting numeric strings. Empty strings are `None`.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Int(n)) => Ok(Some(n)),
        Some(Scalar::UInt(n)) => i64::try_from(n).map(Some).map_err(de::Error::custom),
        Some(Scalar::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Str(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!(
            "expected integer, got {}",
            other.into_string()
        ))),
    }
}

/// Integer, accepting numeric strings.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_i64(deserializer)?.ok_or_else(|| de::Error::custom("expected integer, got empty value"))
}

/// Record counter; absent or empty counts as zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match opt_i64(deserializer)? {
        Some(n) if n > 0 => Ok(n as u64),
        _ => Ok(0),
    }
}

/// Optional decimal, accepting numbers and strings. Empty strings are `None`.
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Bool(b)) => Err(de::Error::custom(format!("expected decimal, got {}", b))),
        Some(other) => Decimal::from_str(other.into_string().trim())
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Optional boolean, accepting `"Y"`/`"N"` and `"true"`/`"false"` strings.
pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(b)),
        Some(Scalar::Int(n)) => Ok(Some(n != 0)),
        Some(Scalar::UInt(n)) => Ok(Some(n != 0)),
        Some(Scalar::Str(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "y" | "yes" | "true" | "1" => Ok(Some(true)),
            "n" | "no" | "false" | "0" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("expected boolean, got {}", other))),
        },
        Some(Scalar::Float(n)) => Err(de::Error::custom(format!("expected boolean, got {}", n))),
    }
}
