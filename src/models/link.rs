//! Affiliate link model.

use serde::{Deserialize, Serialize};

/// A link converted into an affiliate link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateLink {
    /// Generated tracking URL
    #[serde(default)]
    pub promotion_link: String,
    /// The link that was converted
    #[serde(default)]
    pub source_value: String,
}
