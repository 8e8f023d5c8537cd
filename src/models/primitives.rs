//! Primitive parameter types shared by every API operation.
//!
//! Most AliExpress operations accept "one or many" values (product ids,
//! category ids, field names, links) and send them as a single
//! comma-joined string. [`ListParam`] models that input once.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::{Error, Result};

static PRODUCT_URL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.html").expect("product url pattern is valid"));

/// A list-or-scalar request parameter.
///
/// A scalar is stored as a one-element list, so normalizing `"a"` and
/// `["a"]` yields the same wire value.
///
/// # Example
///
/// ```
/// use aliexpress_rs::ListParam;
///
/// let one = ListParam::from("1005001");
/// let many = ListParam::from(vec!["1005001", "1005002"]);
///
/// assert_eq!(one.joined().as_deref(), Some("1005001"));
/// assert_eq!(many.joined().as_deref(), Some("1005001,1005002"));
/// assert_eq!(ListParam::default().joined(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ListParam(Vec<String>);

impl ListParam {
    /// Create a parameter from any sequence of string-like values.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    /// The raw values, as given.
    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if there is no non-blank value.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|s| s.trim().is_empty())
    }

    /// Join the trimmed values with commas, dropping blank entries.
    ///
    /// Returns `None` when nothing is left, so the parameter is not sent.
    pub fn joined(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .0
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(","))
        }
    }
}

impl fmt::Display for ListParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined().unwrap_or_default())
    }
}

impl From<&str> for ListParam {
    fn from(s: &str) -> Self {
        Self(vec![s.to_string()])
    }
}

impl From<String> for ListParam {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl From<&String> for ListParam {
    fn from(s: &String) -> Self {
        Self(vec![s.clone()])
    }
}

impl From<Vec<String>> for ListParam {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl From<Vec<&str>> for ListParam {
    fn from(v: Vec<&str>) -> Self {
        Self::new(v)
    }
}

impl From<&[&str]> for ListParam {
    fn from(v: &[&str]) -> Self {
        Self::new(v.iter().copied())
    }
}

impl From<&[String]> for ListParam {
    fn from(v: &[String]) -> Self {
        Self(v.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for ListParam {
    fn from(v: [&str; N]) -> Self {
        Self::new(v)
    }
}

impl From<Vec<i64>> for ListParam {
    fn from(v: Vec<i64>) -> Self {
        Self::new(v.into_iter().map(|id| id.to_string()))
    }
}

impl From<i64> for ListParam {
    fn from(id: i64) -> Self {
        Self(vec![id.to_string()])
    }
}

/// Join an optional list parameter; absent and empty both become `None`.
pub(crate) fn join_list(param: Option<&ListParam>) -> Option<String> {
    param.and_then(ListParam::joined)
}

/// Extract a product id from a bare id or a product page URL.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the value is neither numeric nor a
/// URL containing `<id>.html`.
///
/// # Example
///
/// ```
/// use aliexpress_rs::models::parse_product_id;
///
/// assert_eq!(parse_product_id("1005003091506814").unwrap(), "1005003091506814");
/// assert_eq!(
///     parse_product_id("https://www.aliexpress.com/item/1005003091506814.html?spm=a2g0o").unwrap(),
///     "1005003091506814"
/// );
/// assert!(parse_product_id("not a product").is_err());
/// ```
pub fn parse_product_id(value: &str) -> Result<String> {
    let value = value.trim();

    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return Ok(value.to_string());
    }

    PRODUCT_URL_ID
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::InvalidArgument(format!("Product id not valid: {}", value)))
}

/// Normalize product ids or URLs into a list of bare ids.
///
/// Each entry may itself be a comma-separated string.
pub fn parse_product_ids(values: &ListParam) -> Result<ListParam> {
    let mut ids = Vec::new();
    for value in values.items() {
        for part in value.split(',').filter(|p| !p.trim().is_empty()) {
            ids.push(parse_product_id(part)?);
        }
    }

    if ids.is_empty() {
        return Err(Error::InvalidArgument(
            "At least one product id is required".to_string(),
        ));
    }

    Ok(ListParam(ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_singleton_normalize_equally() {
        for value in ["1005001", "a,b", "shop_url"] {
            let scalar = ListParam::from(value);
            let singleton = ListParam::from(vec![value]);
            assert_eq!(scalar.joined(), singleton.joined());
        }
    }

    #[test]
    fn test_joined_skips_empty_values() {
        assert_eq!(ListParam::from("").joined(), None);
        assert_eq!(ListParam::from(Vec::<String>::new()).joined(), None);
        assert_eq!(
            ListParam::from(vec!["a", "", "b"]).joined().as_deref(),
            Some("a,b")
        );
        assert!(ListParam::from(vec!["", ""]).is_empty());
    }

    #[test]
    fn test_joined_skips_blank_values() {
        assert_eq!(ListParam::from("   ").joined(), None);
        assert!(ListParam::from(vec![" ", "\t"]).is_empty());
        assert_eq!(
            ListParam::from(vec![" http://x.com/p/1 ", "  "]).joined().as_deref(),
            Some("http://x.com/p/1")
        );
    }

    #[test]
    fn test_numeric_ids() {
        let param = ListParam::from(vec![3i64, 15]);
        assert_eq!(param.joined().as_deref(), Some("3,15"));
        assert_eq!(join_list(Some(&ListParam::from(7i64))).as_deref(), Some("7"));
        assert_eq!(join_list(None), None);
    }

    #[test]
    fn test_parse_product_ids_mixed() {
        let input = ListParam::from(vec![
            "1005001,https://es.aliexpress.com/item/1005002.html",
            "https://aliexpress.com/item/1005003.html?spm=x",
        ]);
        let ids = parse_product_ids(&input).unwrap();
        assert_eq!(ids.joined().as_deref(), Some("1005001,1005002,1005003"));
    }

    #[test]
    fn test_parse_product_ids_rejects_garbage() {
        let err = parse_product_ids(&ListParam::from("https://aliexpress.com/store")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = parse_product_ids(&ListParam::from("")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
