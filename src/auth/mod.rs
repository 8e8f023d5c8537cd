//! Credentials and request signing for the AliExpress affiliate API.
//!
//! Credentials are handed to the client (and through it to the transport)
//! at construction; nothing is registered globally.
//!
//! ```
//! use aliexpress_rs::{Credentials, Currency, Language};
//!
//! let credentials = Credentials::new("app-key", "app-secret", Language::En, Currency::Usd)
//!     .with_tracking_id("my-tracking-id")
//!     .with_app_signature("my-app-signature");
//! ```

mod credentials;
pub mod signature;

pub use credentials::Credentials;
