//! Data models for the AliExpress affiliate API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - List-or-scalar parameters and product id parsing
//! - [`enums`] - Language, currency, link type, sort order, etc.
//! - [`product`] - Products and product search responses
//! - [`category`] - Categories and parent/child filters
//! - [`link`] - Affiliate links
//! - [`order`] - Affiliate orders
//!
//! Raw gateway shapes live in a private `wire` module and are converted
//! into these types before they reach the caller.

pub mod primitives;
pub mod enums;
pub mod product;
pub mod category;
pub mod link;
pub mod order;
pub(crate) mod serde_util;
pub(crate) mod wire;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use product::*;
pub use category::*;
pub use link::*;
pub use order::*;
