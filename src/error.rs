//! Error types for the AliExpress affiliate API client.
//!
//! This module provides a single error type that covers every failure mode
//! of the client: precondition checks performed before a request is sent,
//! transport failures, and empty or malformed responses.

use thiserror::Error;

/// A specialized `Result` type for AliExpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all AliExpress API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Gateway answered with a non-success HTTP status
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, or the status reason when the body is empty
        message: String,
    },

    /// Gateway rejected the call (signature, permissions, throttling, ...)
    #[error("Gateway error: code={code}, message={message}, sub_code={sub_code:?}")]
    Gateway {
        /// Top-level error code
        code: String,
        /// Human-readable error message
        message: String,
        /// Optional detailed error code
        sub_code: Option<String>,
        /// Optional detailed error message
        sub_message: Option<String>,
        /// Request id assigned by the gateway
        request_id: Option<String>,
    },

    /// The operation envelope reported a non-200 `resp_code`
    #[error("Response code {code} - {message}")]
    Response {
        /// Value of `resp_code`
        code: i64,
        /// Value of `resp_msg`
        message: String,
    },

    /// The response body was not shaped like the expected envelope
    #[error("Unexpected response format: {0}")]
    ResponseFormat(String),

    /// The call succeeded but returned no products (or links)
    #[error("Products not found: {0}")]
    ProductsNotFound(String),

    /// The call succeeded but returned no categories
    #[error("Categories not found: {0}")]
    CategoriesNotFound(String),

    /// The call succeeded but returned no orders
    #[error("Orders not found: {0}")]
    OrdersNotFound(String),

    /// The operation requires a tracking id and none is configured
    #[error("Invalid tracking id: {0}")]
    InvalidTrackingId(String),

    /// Invalid argument provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the call succeeded but matched no records.
    ///
    /// # Example
    ///
    /// ```
    /// use aliexpress_rs::Error;
    ///
    /// let err = Error::OrdersNotFound("No orders found".into());
    /// assert!(err.is_not_found());
    /// ```
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ProductsNotFound(_) | Error::CategoriesNotFound(_) | Error::OrdersNotFound(_)
        )
    }

    /// Returns `true` if this error was raised by the transport or while
    /// decoding the gateway's answer.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Json(_)
                | Error::Api { .. }
                | Error::Gateway { .. }
                | Error::Response { .. }
                | Error::ResponseFormat(_)
        )
    }

    /// Returns `true` if this error was detected locally, before any
    /// request was sent.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidTrackingId(_)
            | Error::InvalidArgument(_)
            | Error::UrlParse(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Create a gateway error from an `error_response` object.
    pub(crate) fn from_error_response(body: &serde_json::Value) -> Self {
        let field = |name: &str| -> Option<String> {
            body.get(name).and_then(|v| match v {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
        };

        Error::Gateway {
            code: field("code").unwrap_or_else(|| "unknown".to_string()),
            message: field("msg").unwrap_or_else(|| "Unknown gateway error".to_string()),
            sub_code: field("sub_code"),
            sub_message: field("sub_msg"),
            request_id: field("request_id"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants() {
        assert!(Error::ProductsNotFound("none".into()).is_not_found());
        assert!(Error::CategoriesNotFound("none".into()).is_not_found());
        assert!(Error::OrdersNotFound("none".into()).is_not_found());
        assert!(!Error::InvalidTrackingId("missing".into()).is_not_found());
    }

    #[test]
    fn test_client_errors() {
        assert!(Error::InvalidTrackingId("missing".into()).is_client_error());
        assert!(Error::InvalidArgument("bad".into()).is_client_error());
        assert!(!Error::ProductsNotFound("none".into()).is_client_error());
        assert!(Error::Api { status: 403, message: String::new() }.is_client_error());
        assert!(!Error::Api { status: 502, message: String::new() }.is_client_error());
    }

    #[test]
    fn test_from_error_response() {
        let body = serde_json::json!({
            "code": 15,
            "msg": "Remote service error",
            "sub_code": "isv.appkey-not-exists",
            "sub_msg": "Invalid app Key",
            "request_id": "0ba2887315178178017221014"
        });

        match Error::from_error_response(&body) {
            Error::Gateway {
                code,
                message,
                sub_code,
                sub_message,
                request_id,
            } => {
                assert_eq!(code, "15");
                assert_eq!(message, "Remote service error");
                assert_eq!(sub_code.as_deref(), Some("isv.appkey-not-exists"));
                assert_eq!(sub_message.as_deref(), Some("Invalid app Key"));
                assert_eq!(request_id.as_deref(), Some("0ba2887315178178017221014"));
            }
            other => panic!("Expected Gateway error, got {:?}", other),
        }
        assert!(Error::from_error_response(&body).is_transport_error());
    }
}
