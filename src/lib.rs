//! # aliexpress-rs
//!
//! An async Rust client for the AliExpress affiliate (portals) API.
//!
//! The client wraps the signed AliExpress gateway with a strongly-typed
//! surface: product details and searches, affiliate link generation,
//! categories with a client-wide cache, smart match recommendations, and
//! affiliate order reports.
//!
//! ## Features
//!
//! - **Explicit credentials**: no global state, every client owns its defaults
//! - **Typed responses**: prices as `Decimal`, nested wire lists flattened
//! - **Category cache**: parent/child views served from one fetch
//! - **Pluggable transport**: swap the HTTP layer for a mock in tests
//! - **Async-first**: Built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aliexpress_rs::{AliexpressClient, Credentials, Currency, Language};
//! use aliexpress_rs::api::ProductSearchQuery;
//!
//! #[tokio::main]
//! async fn main() -> aliexpress_rs::Result<()> {
//!     let credentials = Credentials::new("app-key", "app-secret", Language::En, Currency::Usd)
//!         .with_tracking_id("my-tracking-id");
//!     let client = AliexpressClient::new(credentials)?;
//!
//!     // Product details by id or URL
//!     let products = client
//!         .products()
//!         .details("https://aliexpress.com/item/1005003091506814.html", None)
//!         .await?;
//!     println!("{:?}", products[0].product_title);
//!
//!     // Keyword search
//!     let page = client
//!         .products()
//!         .search(ProductSearchQuery::new().keywords("phone case"))
//!         .await?;
//!     println!("Found {:?} products", page.total_record_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Affiliate Links
//!
//! ```rust,no_run
//! use aliexpress_rs::{AliexpressClient, LinkType};
//!
//! #[tokio::main]
//! async fn main() -> aliexpress_rs::Result<()> {
//!     // Reads ALIEXPRESS_APP_KEY, ALIEXPRESS_APP_SECRET, ALIEXPRESS_TRACKING_ID, ...
//!     let client = AliexpressClient::from_env()?;
//!
//!     let links = client
//!         .links()
//!         .generate(
//!             vec![
//!                 "https://aliexpress.com/item/1005003091506814.html",
//!                 "https://aliexpress.com/item/1005001234567890.html",
//!             ],
//!             LinkType::Hot,
//!         )
//!         .await?;
//!
//!     for link in links {
//!         println!("{} -> {}", link.source_value, link.promotion_link);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{AliexpressClient, ApiRequest, ClientConfig, HttpTransport, Transport};
pub use error::{Error, Result};
pub use models::{Currency, Language, LinkType, ListParam, ProductType, SortBy};

/// Prelude module for convenient imports.
///
/// ```rust
/// use aliexpress_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{OrderListQuery, ProductDetailsQuery, ProductSearchQuery, SmartMatchQuery};
    pub use crate::auth::Credentials;
    pub use crate::client::{AliexpressClient, ClientConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Parameters
        Currency, Language, LinkType, ListParam, ProductType, SortBy,
        // Responses
        AffiliateLink, Category, HotProductsResponse, Order, OrderListResponse, Product,
        ProductsResponse, SmartMatchResponse,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_credentials() {
        let credentials = Credentials::new("12345", "secret", Language::Fr, Currency::Eur);
        let client = AliexpressClient::new(credentials).unwrap();
        assert_eq!(client.credentials().app_key(), "12345");
        assert_eq!(client.credentials().language(), Language::Fr);
        assert_eq!(client.credentials().tracking_id(), None);
    }

    #[test]
    fn test_list_param_from_ids() {
        let ids = ListParam::from(vec![1005003091506814i64, 4000000000001]);
        assert_eq!(ids.joined().as_deref(), Some("1005003091506814,4000000000001"));
    }
}
