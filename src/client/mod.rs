//! Client, configuration and transport for the AliExpress affiliate API.
//!
//! This module provides the main entry point [`AliexpressClient`].
//!
//! # Example
//!
//! ```no_run
//! use aliexpress_rs::AliexpressClient;
//!
//! # async fn example() -> aliexpress_rs::Result<()> {
//! let client = AliexpressClient::from_env()?;
//!
//! let categories = client.categories().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub(crate) mod request;
mod transport;

pub use config::{ClientConfig, DEFAULT_GATEWAY_URL};
pub use http::AliexpressClient;
pub use transport::{ApiRequest, HttpTransport, Transport};
#[cfg(test)]
pub(crate) use transport::MockTransport;
pub(crate) use http::ClientInner;
pub(crate) use request::Operation;
