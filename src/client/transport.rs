//! Transport layer: the single seam between the client and the network.
//!
//! The client hands a method name and a flat parameter map to a
//! [`Transport`] and gets the gateway's JSON body back. [`HttpTransport`]
//! is the production implementation; tests substitute a mock.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

use crate::auth::signature::{self, SIGN_METHOD};
use crate::auth::Credentials;
use crate::{Error, Result};

use super::config::ClientConfig;

/// One outbound API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: String,
    params: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Create a request for `method` with its business parameters.
    pub fn new(method: impl Into<String>, params: BTreeMap<String, String>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// API method name, e.g. `aliexpress.affiliate.product.query`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Business parameters, already coerced to strings.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// A single business parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Executes API requests.
///
/// Implementations own authentication, signing and the network. Errors are
/// returned as-is to the caller; the client never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the full JSON response body.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// Signed HTTP transport for the AliExpress gateway.
pub struct HttpTransport {
    http: reqwest::Client,
    gateway: Url,
    credentials: Arc<Credentials>,
}

impl HttpTransport {
    /// Build a transport for the given credentials and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(credentials: Arc<Credentials>, config: &ClientConfig) -> Result<Self> {
        let gateway = Url::parse(&config.gateway_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            gateway,
            credentials,
        })
    }

    /// Merge system parameters into the business parameters and sign them.
    fn signed_params(&self, request: &ApiRequest, timestamp_ms: i64) -> BTreeMap<String, String> {
        let mut params = request.params().clone();
        params.insert("method".to_string(), request.method().to_string());
        params.insert("app_key".to_string(), self.credentials.app_key().to_string());
        params.insert("sign_method".to_string(), SIGN_METHOD.to_string());
        params.insert("timestamp".to_string(), timestamp_ms.to_string());
        params.insert("format".to_string(), "json".to_string());
        params.insert("v".to_string(), "2.0".to_string());

        let sign = signature::sign(&params, self.credentials.app_secret());
        params.insert("sign".to_string(), sign);
        params
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let params = self.signed_params(&request, Utc::now().timestamp_millis());

        let response = self
            .http
            .post(self.gateway.clone())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        decode_response(request.method(), status, text)
    }
}

/// Map a gateway reply to its JSON body or the matching error.
fn decode_response(method: &str, status: StatusCode, text: String) -> Result<Value> {
    if !status.is_success() {
        let message = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown status").to_string()
        } else {
            text
        };
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body: Value = serde_json::from_str(&text)?;

    if let Some(error) = body.get("error_response") {
        let error = Error::from_error_response(error);
        tracing::warn!(method, %error, "Gateway rejected request");
        return Err(error);
    }

    Ok(body)
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("gateway", &self.gateway.as_str())
            .field("app_key", &self.credentials.app_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Language};

    fn transport() -> HttpTransport {
        let credentials = Credentials::new("12345", "secret", Language::En, Currency::Usd);
        HttpTransport::new(Arc::new(credentials), &ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_signed_params() {
        let mut business = BTreeMap::new();
        business.insert("app_signature".to_string(), "sig".to_string());
        let request = ApiRequest::new("aliexpress.affiliate.category.get", business);

        let params = transport().signed_params(&request, 1_700_000_000_000);

        assert_eq!(params["method"], "aliexpress.affiliate.category.get");
        assert_eq!(params["app_key"], "12345");
        assert_eq!(params["sign_method"], "sha256");
        assert_eq!(params["timestamp"], "1700000000000");
        assert_eq!(params["app_signature"], "sig");

        let mut unsigned = params.clone();
        unsigned.remove("sign");
        assert_eq!(params["sign"], signature::sign(&unsigned, "secret"));
    }

    #[test]
    fn test_invalid_gateway_url() {
        let credentials = Credentials::new("12345", "secret", Language::En, Currency::Usd);
        let config = ClientConfig::default().with_gateway_url("not a url");
        let err = HttpTransport::new(Arc::new(credentials), &config).unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    const METHOD: &str = "aliexpress.affiliate.category.get";

    #[test]
    fn test_decode_success() {
        let body = decode_response(
            METHOD,
            StatusCode::OK,
            r#"{"aliexpress_affiliate_category_get_response":{"resp_result":{"resp_code":200}}}"#
                .to_string(),
        )
        .unwrap();
        assert_eq!(
            body["aliexpress_affiliate_category_get_response"]["resp_result"]["resp_code"],
            200
        );
    }

    #[test]
    fn test_decode_http_status() {
        let err = decode_response(METHOD, StatusCode::BAD_GATEWAY, "upstream down".to_string())
            .unwrap_err();
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream down");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }

        let err = decode_response(METHOD, StatusCode::NOT_FOUND, "  ".to_string()).unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, ref message } if message == "Not Found"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_decode_gateway_error() {
        let err = decode_response(
            METHOD,
            StatusCode::OK,
            r#"{"error_response":{"code":15,"msg":"Remote service error","sub_code":"isv.invalid-parameter","request_id":"2101d05f"}}"#
                .to_string(),
        )
        .unwrap_err();

        match err {
            Error::Gateway {
                code,
                message,
                sub_code,
                request_id,
                ..
            } => {
                assert_eq!(code, "15");
                assert_eq!(message, "Remote service error");
                assert_eq!(sub_code.as_deref(), Some("isv.invalid-parameter"));
                assert_eq!(request_id.as_deref(), Some("2101d05f"));
            }
            other => panic!("Expected Gateway error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_non_json_body() {
        let err = decode_response(METHOD, StatusCode::OK, "<html>busy</html>".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_transport_error());
    }

    #[test]
    fn test_api_request_accessors() {
        let mut params = BTreeMap::new();
        params.insert("page_no".to_string(), "2".to_string());
        let request = ApiRequest::new("aliexpress.affiliate.order.list", params);
        assert_eq!(request.method(), "aliexpress.affiliate.order.list");
        assert_eq!(request.param("page_no"), Some("2"));
        assert_eq!(request.param("page_size"), None);
    }
}
