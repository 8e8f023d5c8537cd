//! Wire types for the `result` object of each operation envelope.
//!
//! These mirror the gateway's JSON exactly, including its nesting
//! (`products.product[]`) and field-name typos. Public models are built
//! from them in the sibling modules.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use rust_decimal::Decimal;

use super::serde_util;
use super::{AffiliateLink, Category, Order};

/// A product exactly as the gateway returns it.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawProduct {
    #[serde(deserialize_with = "serde_util::string")]
    pub product_id: String,
    #[serde(default)]
    pub product_title: Option<String>,
    #[serde(default)]
    pub product_detail_url: Option<String>,
    #[serde(default)]
    pub product_main_image_url: Option<String>,
    #[serde(default)]
    pub product_small_image_urls: Option<StringList>,
    #[serde(default)]
    pub product_video_url: Option<String>,
    #[serde(default)]
    pub promotion_link: Option<String>,

    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub app_sale_price: Option<Decimal>,
    #[serde(default)]
    pub app_sale_price_currency: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub original_price_currency: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub sale_price_currency: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub target_app_sale_price: Option<Decimal>,
    #[serde(default)]
    pub target_app_sale_price_currency: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub target_original_price: Option<Decimal>,
    #[serde(default)]
    pub target_original_price_currency: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub target_sale_price: Option<Decimal>,
    #[serde(default)]
    pub target_sale_price_currency: Option<String>,

    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub discount: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub commission_rate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub hot_product_commission_rate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub relevant_market_commission_rate: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_string")]
    pub evaluate_rate: Option<String>,

    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub first_level_category_id: Option<i64>,
    #[serde(default)]
    pub first_level_category_name: Option<String>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub second_level_category_id: Option<i64>,
    #[serde(default)]
    pub second_level_category_name: Option<String>,

    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub shop_id: Option<i64>,
    #[serde(default)]
    pub shop_url: Option<String>,

    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub lastest_volume: Option<i64>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// `{"string": [..]}` list wrapper used for image URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StringList {
    #[serde(default)]
    pub string: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProductList {
    #[serde(default)]
    pub product: Vec<RawProduct>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CategoryList {
    #[serde(default)]
    pub category: Vec<Category>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PromotionLinkList {
    #[serde(default)]
    pub promotion_link: Vec<AffiliateLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct OrderList {
    #[serde(default)]
    pub order: Vec<Order>,
}

/// Result of `productdetail.get`, `product.query`, `hotproduct.query`
/// and `product.smartmatch`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductsResult {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub current_page_no: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::count")]
    pub current_record_count: u64,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub total_record_count: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_bool")]
    pub is_finished: Option<bool>,
    #[serde(default)]
    pub products: Option<ProductList>,
}

/// Result of `link.generate`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LinksResult {
    #[serde(default, deserialize_with = "serde_util::count")]
    pub total_result_count: u64,
    #[serde(default)]
    pub promotion_links: Option<PromotionLinkList>,
}

/// Result of `category.get`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CategoriesResult {
    #[serde(default, deserialize_with = "serde_util::count")]
    pub total_result_count: u64,
    #[serde(default)]
    pub categories: Option<CategoryList>,
}

/// Result of `order.list`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrdersResult {
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub current_page_no: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::count")]
    pub current_record_count: u64,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub total_record_count: Option<i64>,
    #[serde(default, deserialize_with = "serde_util::opt_i64")]
    pub total_page_no: Option<i64>,
    #[serde(default)]
    pub orders: Option<OrderList>,
}
