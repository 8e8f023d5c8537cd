//! Building parameter maps from request structs and unwrapping operation
//! envelopes.
//!
//! Every operation is described by a serde request struct: field names are
//! wire names and field types carry the coercion. [`to_params`] flattens
//! such a struct into the string map the gateway expects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{Error, Result};

/// An API operation, identified by its method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operation {
    method: &'static str,
}

impl Operation {
    pub(crate) const fn new(method: &'static str) -> Self {
        Self { method }
    }

    pub(crate) fn method(&self) -> &'static str {
        self.method
    }

    /// Name of the top-level field holding this operation's envelope.
    pub(crate) fn response_key(&self) -> String {
        format!("{}_response", self.method.replace('.', "_"))
    }
}

/// Flatten a request struct into wire parameters.
///
/// `null` fields are not sent; numbers and booleans are stringified.
pub(crate) fn to_params<R: Serialize>(request: &R) -> Result<BTreeMap<String, String>> {
    let fields = match serde_json::to_value(request)? {
        Value::Object(fields) => fields,
        other => {
            return Err(Error::InvalidArgument(format!(
                "request must serialize to an object, got {}",
                other
            )))
        }
    };

    let mut params = BTreeMap::new();
    for (name, value) in fields {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::InvalidArgument(format!(
                    "parameter `{}` must be a scalar, got {}",
                    name, other
                )))
            }
        };
        params.insert(name, value);
    }

    Ok(params)
}

#[derive(Deserialize)]
struct RespResult {
    resp_code: i64,
    #[serde(default)]
    resp_msg: Option<String>,
    #[serde(default)]
    result: Option<Value>,
}

/// Extract `<response_key>.resp_result.result` from a response body.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(mut body: Value, response_key: &str) -> Result<T> {
    let resp_result = body
        .get_mut(response_key)
        .and_then(|envelope| envelope.get_mut("resp_result"))
        .map(Value::take)
        .ok_or_else(|| {
            Error::ResponseFormat(format!("missing `{}.resp_result`", response_key))
        })?;

    let resp: RespResult = serde_json::from_value(resp_result)
        .map_err(|e| Error::ResponseFormat(format!("invalid `resp_result`: {}", e)))?;

    if resp.resp_code != 200 {
        return Err(Error::Response {
            code: resp.resp_code,
            message: resp.resp_msg.unwrap_or_default(),
        });
    }

    let result = resp
        .result
        .ok_or_else(|| Error::ResponseFormat("missing `result`".to_string()))?;

    serde_json::from_value(result)
        .map_err(|e| Error::ResponseFormat(format!("invalid `result`: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinkType, SortBy};
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample<'a> {
        keywords: Option<&'a str>,
        page_no: Option<u32>,
        sort: Option<SortBy>,
        promotion_link_type: LinkType,
        tracking_id: Option<&'a str>,
    }

    #[test]
    fn test_response_key() {
        let op = Operation::new("aliexpress.affiliate.productdetail.get");
        assert_eq!(op.method(), "aliexpress.affiliate.productdetail.get");
        assert_eq!(op.response_key(), "aliexpress_affiliate_productdetail_get_response");
    }

    #[test]
    fn test_to_params_skips_absent_fields() {
        let params = to_params(&Sample {
            keywords: Some("phone case"),
            page_no: Some(3),
            sort: Some(SortBy::SalePriceAsc),
            promotion_link_type: LinkType::Hot,
            tracking_id: None,
        })
        .unwrap();

        assert_eq!(params.len(), 4);
        assert_eq!(params["keywords"], "phone case");
        assert_eq!(params["page_no"], "3");
        assert_eq!(params["sort"], "SALE_PRICE_ASC");
        assert_eq!(params["promotion_link_type"], "2");
        assert!(!params.contains_key("tracking_id"));
    }

    #[test]
    fn test_to_params_rejects_nested_values() {
        #[derive(Serialize)]
        struct Nested {
            ids: Vec<u32>,
        }
        let err = to_params(&Nested { ids: vec![1, 2] }).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_unwrap_envelope_success() {
        let body = json!({
            "aliexpress_affiliate_category_get_response": {
                "resp_result": {
                    "resp_code": 200,
                    "resp_msg": "Call succeeds",
                    "result": { "total_result_count": 7 }
                },
                "request_id": "2101d05f17000000"
            }
        });

        let result: Value =
            unwrap_envelope(body, "aliexpress_affiliate_category_get_response").unwrap();
        assert_eq!(result["total_result_count"], 7);
    }

    #[test]
    fn test_unwrap_envelope_error_code() {
        let body = json!({
            "aliexpress_affiliate_category_get_response": {
                "resp_result": { "resp_code": 402, "resp_msg": "Invalid input parameters" }
            }
        });

        let err = unwrap_envelope::<Value>(body, "aliexpress_affiliate_category_get_response")
            .unwrap_err();
        match err {
            Error::Response { code, message } => {
                assert_eq!(code, 402);
                assert_eq!(message, "Invalid input parameters");
            }
            other => panic!("Expected Response error, got {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_envelope_wrong_key() {
        let body = json!({ "something_else_response": {} });
        let err = unwrap_envelope::<Value>(body, "aliexpress_affiliate_category_get_response")
            .unwrap_err();
        assert!(matches!(err, Error::ResponseFormat(_)));
    }
}
