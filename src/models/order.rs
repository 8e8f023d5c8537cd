//! Affiliate order models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::serde_util;
use super::wire::OrdersResult;

/// An order attributed to the affiliate account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id
    #[serde(deserialize_with = "serde_util::string")]
    pub order_id: String,
    /// Parent order id, for split orders
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub parent_order_id: Option<String>,
    /// Sub-order id
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub sub_order_id: Option<String>,
    /// Order number shown to the buyer
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub order_number: Option<String>,
    /// Order status, e.g. `"Payment Completed"`
    #[serde(default)]
    pub order_status: Option<String>,
    /// Order type
    #[serde(default)]
    pub order_type: Option<String>,
    /// Platform the order was placed on
    #[serde(default)]
    pub order_platform: Option<String>,
    /// Settlement status of the commission
    #[serde(default)]
    pub effect_detail_status: Option<String>,

    /// Amount paid by the buyer
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub paid_amount: Option<Decimal>,
    /// Commission rate, e.g. `"7.0%"`
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub commission_rate: Option<String>,
    /// Estimated commission on payment
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub estimated_paid_commission: Option<Decimal>,
    /// Estimated commission on completion
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub estimated_finished_commission: Option<Decimal>,
    /// Bonus commission for new buyers
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub new_buyer_bonus_commission: Option<Decimal>,
    /// Currency the commission is settled in
    #[serde(default)]
    pub settled_currency: Option<String>,

    /// When the order was created, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub created_time: Option<String>,
    /// When the order was paid
    #[serde(default)]
    pub paid_time: Option<String>,
    /// When the order was completed
    #[serde(default)]
    pub finished_time: Option<String>,

    /// Product id
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub product_id: Option<String>,
    /// Product title
    #[serde(default)]
    pub product_title: Option<String>,
    /// Product main image URL
    #[serde(default)]
    pub product_main_image_url: Option<String>,
    /// Product page URL
    #[serde(default)]
    pub product_detail_url: Option<String>,
    /// Number of units ordered
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub product_count: Option<i64>,
    /// Category id of the product
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub category_id: Option<i64>,

    /// Destination country code
    #[serde(default)]
    pub ship_to_country: Option<String>,
    /// Tracking id the order is attributed to
    #[serde(default)]
    pub tracking_id: Option<String>,
    /// Custom parameters attached to the affiliate link
    #[serde(default)]
    pub customer_parameters: Option<String>,
    /// Whether the buyer is new to the platform
    #[serde(default, deserialize_with = "serde_util::opt_bool")]
    pub is_new_buyer: Option<bool>,
    /// Whether the product was a hot product
    #[serde(default, deserialize_with = "serde_util::opt_bool")]
    pub is_hot_product: Option<bool>,

    /// Any other field returned by the gateway
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A page of affiliate orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    /// Page number of this result
    pub current_page_no: Option<i64>,
    /// Number of orders in this page
    pub current_record_count: u64,
    /// Number of orders matching the query
    pub total_record_count: Option<i64>,
    /// Number of pages available
    pub total_page_no: Option<i64>,
    /// The orders, in gateway order
    pub orders: Vec<Order>,
}

impl From<OrdersResult> for OrderListResponse {
    fn from(r: OrdersResult) -> Self {
        Self {
            current_page_no: r.current_page_no,
            current_record_count: r.current_record_count,
            total_record_count: r.total_record_count,
            total_page_no: r.total_page_no,
            orders: r.orders.map(|o| o.order).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_order_from_wire() {
        let result: OrdersResult = serde_json::from_value(json!({
            "current_page_no": 1,
            "current_record_count": 1,
            "total_page_no": 1,
            "total_record_count": 1,
            "orders": {
                "order": [{
                    "order_id": 8165202346543210i64,
                    "parent_order_id": 8165202346543200i64,
                    "order_status": "Payment Completed",
                    "paid_amount": "12.30",
                    "estimated_paid_commission": "0.86",
                    "product_id": 1005003091506814i64,
                    "product_count": "2",
                    "is_new_buyer": "N",
                    "tracking_id": "abc123",
                    "order_platform": "mobile"
                }]
            }
        }))
        .unwrap();

        let response = OrderListResponse::from(result);
        assert_eq!(response.orders.len(), 1);

        let order = &response.orders[0];
        assert_eq!(order.order_id, "8165202346543210");
        assert_eq!(order.parent_order_id.as_deref(), Some("8165202346543200"));
        assert_eq!(order.paid_amount, Some(dec!(12.30)));
        assert_eq!(order.estimated_paid_commission, Some(dec!(0.86)));
        assert_eq!(order.product_count, Some(2));
        assert_eq!(order.is_new_buyer, Some(false));
        assert_eq!(order.order_platform.as_deref(), Some("mobile"));
    }
}
