//! Application credentials and per-client defaults.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::models::{Currency, Language};
use crate::{Error, Result};

/// Credentials and default request settings for one client.
///
/// The app secret is held as a [`SecretString`] and never printed by
/// `Debug`. Clients share one `Credentials` value behind an `Arc`.
///
/// # Example
///
/// ```
/// use aliexpress_rs::{Credentials, Currency, Language};
///
/// let credentials = Credentials::new("app-key", "app-secret", Language::En, Currency::Eur)
///     .with_tracking_id("my-tracking-id");
/// assert_eq!(credentials.tracking_id(), Some("my-tracking-id"));
/// ```
pub struct Credentials {
    app_key: String,
    app_secret: SecretString,
    language: Language,
    currency: Currency,
    tracking_id: Option<String>,
    app_signature: Option<String>,
}

impl Credentials {
    /// Create credentials with no tracking id and no app signature.
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        language: Language,
        currency: Currency,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: SecretString::from(app_secret.into()),
            language,
            currency,
            tracking_id: None,
            app_signature: None,
        }
    }

    /// Read credentials from the environment.
    ///
    /// Required: `ALIEXPRESS_APP_KEY`, `ALIEXPRESS_APP_SECRET`.
    /// Optional: `ALIEXPRESS_LANGUAGE` (default `EN`), `ALIEXPRESS_CURRENCY`
    /// (default `USD`), `ALIEXPRESS_TRACKING_ID`, `ALIEXPRESS_APP_SIGNATURE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing or a
    /// language/currency code is unknown.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", name)))
        };
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let language = match optional("ALIEXPRESS_LANGUAGE") {
            Some(code) => code
                .parse::<Language>()
                .map_err(|e| Error::Config(format!("ALIEXPRESS_LANGUAGE: {}", e)))?,
            None => Language::default(),
        };
        let currency = match optional("ALIEXPRESS_CURRENCY") {
            Some(code) => code
                .parse::<Currency>()
                .map_err(|e| Error::Config(format!("ALIEXPRESS_CURRENCY: {}", e)))?,
            None => Currency::default(),
        };

        Ok(Self {
            app_key: required("ALIEXPRESS_APP_KEY")?,
            app_secret: SecretString::from(required("ALIEXPRESS_APP_SECRET")?),
            language,
            currency,
            tracking_id: optional("ALIEXPRESS_TRACKING_ID"),
            app_signature: optional("ALIEXPRESS_APP_SIGNATURE"),
        })
    }

    /// Set the tracking id used for links and product searches.
    pub fn with_tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    /// Set the app signature sent with every request.
    pub fn with_app_signature(mut self, app_signature: impl Into<String>) -> Self {
        self.app_signature = Some(app_signature.into());
        self
    }

    /// The application key.
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub(crate) fn app_secret(&self) -> &str {
        self.app_secret.expose_secret()
    }

    /// Default language for product data.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Default currency for product prices.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The configured tracking id, if any. Blank ids count as absent.
    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// The configured app signature, if any.
    pub fn app_signature(&self) -> Option<&str> {
        self.app_signature.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"[REDACTED]")
            .field("language", &self.language)
            .field("currency", &self.currency)
            .field("tracking_id", &self.tracking_id)
            .field("app_signature", &self.app_signature)
            .finish()
    }
}
