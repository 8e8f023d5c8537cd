//! Enumeration types for the AliExpress affiliate API.
//!
//! Every enum serializes to the literal value the gateway expects, so it
//! can be placed directly in a request struct.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Declares an enum of upper-case vendor codes with string conversions.
macro_rules! vendor_codes {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// The code sent on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($code => Ok($name::$variant),)+
                    other => Err(Error::InvalidArgument(format!(
                        concat!("Unknown ", stringify!($name), " code: {}"),
                        other
                    ))),
                }
            }
        }
    };
}

vendor_codes! {
    /// Language of the returned product titles and links.
    Language {
        En => "EN",
        Ru => "RU",
        Pt => "PT",
        Es => "ES",
        Fr => "FR",
        Id => "ID",
        It => "IT",
        Th => "TH",
        Ja => "JA",
        Ar => "AR",
        Vi => "VI",
        Tr => "TR",
        De => "DE",
        He => "HE",
        Ko => "KO",
        Nl => "NL",
        Pl => "PL",
        Mx => "MX",
        Cl => "CL",
        Iw => "IW",
        In => "IN",
    }
}

vendor_codes! {
    /// Currency used for the target prices of returned products.
    Currency {
        Usd => "USD",
        Gbp => "GBP",
        Cad => "CAD",
        Eur => "EUR",
        Uah => "UAH",
        Mxn => "MXN",
        Try => "TRY",
        Rub => "RUB",
        Brl => "BRL",
        Aud => "AUD",
        Inr => "INR",
        Jpy => "JPY",
        Idr => "IDR",
        Sek => "SEK",
        Krw => "KRW",
        Ils => "ILS",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

/// Commission scheme of a generated affiliate link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinkType {
    /// Standard commission
    #[default]
    Normal,
    /// Hot product commission
    Hot,
}

impl LinkType {
    /// Numeric `promotion_link_type` value.
    pub fn code(&self) -> u8 {
        match self {
            LinkType::Normal => 0,
            LinkType::Hot => 2,
        }
    }
}

impl Serialize for LinkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Platform product type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Every product
    All,
    /// Marketplace products
    Plaza,
    /// Tmall products
    Tmall,
}

/// Sort order for product searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    /// Sale price, lowest first
    SalePriceAsc,
    /// Sale price, highest first
    SalePriceDesc,
    /// Recent sales volume, lowest first
    LastVolumeAsc,
    /// Recent sales volume, highest first
    LastVolumeDesc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!(" eur ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("XX".parse::<Currency>().is_err());
        assert_eq!(Language::Iw.to_string(), "IW");
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(serde_json::to_value(Currency::Brl).unwrap(), "BRL");
        assert_eq!(serde_json::to_value(LinkType::Hot).unwrap(), 2);
        assert_eq!(serde_json::to_value(LinkType::Normal).unwrap(), 0);
        assert_eq!(serde_json::to_value(ProductType::Tmall).unwrap(), "TMALL");
        assert_eq!(
            serde_json::to_value(SortBy::LastVolumeDesc).unwrap(),
            "LAST_VOLUME_DESC"
        );
    }
}
