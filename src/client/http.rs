//! Client implementation for the AliExpress affiliate API.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{CategoriesService, LinksService, OrdersService, ProductsService};
use crate::auth::Credentials;
use crate::models::Category;
use crate::Result;

use super::config::ClientConfig;
use super::request::{to_params, unwrap_envelope, Operation};
use super::transport::{ApiRequest, HttpTransport, Transport};

/// The main client for interacting with the AliExpress affiliate API.
///
/// This client provides access to all API services through method calls
/// that return service structs. Clones share the same transport and
/// category cache.
///
/// # Example
///
/// ```no_run
/// use aliexpress_rs::{AliexpressClient, Credentials, Currency, Language};
///
/// # async fn example() -> aliexpress_rs::Result<()> {
/// let credentials = Credentials::new("app-key", "app-secret", Language::En, Currency::Usd)
///     .with_tracking_id("my-tracking-id");
/// let client = AliexpressClient::new(credentials)?;
///
/// let products = client.products().details("1005003091506814", None).await?;
/// let parents = client.categories().parents(true).await?;
/// # Ok(())
/// # }
/// ```
pub struct AliexpressClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) credentials: Arc<Credentials>,
    pub(crate) categories: RwLock<Option<Vec<Category>>>,
}

impl AliexpressClient {
    /// Create a client that talks to the default gateway.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let credentials = Arc::new(credentials);
        let transport = HttpTransport::new(credentials.clone(), &config)?;
        Ok(Self::build(credentials, Box::new(transport)))
    }

    /// Create a client from `ALIEXPRESS_*` environment variables.
    ///
    /// See [`Credentials::from_env`] for the variables read.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a client over any transport.
    pub fn with_transport(credentials: Credentials, transport: impl Transport + 'static) -> Self {
        Self::build(Arc::new(credentials), Box::new(transport))
    }

    fn build(credentials: Arc<Credentials>, transport: Box<dyn Transport>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport,
                credentials,
                categories: RwLock::new(None),
            }),
        }
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// Get the affiliate links service.
    pub fn links(&self) -> LinksService {
        LinksService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// The credentials and defaults this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }
}

impl ClientInner {
    /// Serialize `request`, send it as `operation`, and decode the
    /// operation's `result` object.
    pub(crate) async fn execute<R, T>(&self, operation: Operation, request: &R) -> Result<T>
    where
        R: Serialize,
        T: DeserializeOwned,
    {
        let params = to_params(request)?;
        tracing::debug!(
            method = operation.method(),
            params = params.len(),
            "Executing API request"
        );

        let body = self
            .transport
            .execute(ApiRequest::new(operation.method(), params))
            .await?;

        unwrap_envelope(body, &operation.response_key())
    }
}

impl Clone for AliexpressClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for AliexpressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliexpressClient")
            .field("credentials", &self.inner.credentials)
            .finish()
    }
}
