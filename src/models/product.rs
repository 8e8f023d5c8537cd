//! Product models and the product transform shared by every product
//! operation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::wire::{ProductsResult, RawProduct};

/// An affiliate product.
///
/// Fields mirror the gateway's product record. Image lists are flattened
/// and the gateway's `lastest_volume` is exposed as `latest_volume`. Fields
/// not modelled here are kept in [`extra`](Product::extra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub product_id: String,
    /// Product title in the requested language
    #[serde(default)]
    pub product_title: Option<String>,
    /// Product page URL
    #[serde(default)]
    pub product_detail_url: Option<String>,
    /// Main image URL
    #[serde(default)]
    pub product_main_image_url: Option<String>,
    /// Additional image URLs
    #[serde(default)]
    pub product_small_image_urls: Vec<String>,
    /// Video URL
    #[serde(default)]
    pub product_video_url: Option<String>,
    /// Affiliate link for this product
    #[serde(default)]
    pub promotion_link: Option<String>,

    /// Price in the app
    #[serde(default)]
    pub app_sale_price: Option<Decimal>,
    /// Currency of `app_sale_price`
    #[serde(default)]
    pub app_sale_price_currency: Option<String>,
    /// Price before discount
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Currency of `original_price`
    #[serde(default)]
    pub original_price_currency: Option<String>,
    /// Price after discount
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// Currency of `sale_price`
    #[serde(default)]
    pub sale_price_currency: Option<String>,
    /// App price in the target currency
    #[serde(default)]
    pub target_app_sale_price: Option<Decimal>,
    /// Currency of `target_app_sale_price`
    #[serde(default)]
    pub target_app_sale_price_currency: Option<String>,
    /// Original price in the target currency
    #[serde(default)]
    pub target_original_price: Option<Decimal>,
    /// Currency of `target_original_price`
    #[serde(default)]
    pub target_original_price_currency: Option<String>,
    /// Sale price in the target currency
    #[serde(default)]
    pub target_sale_price: Option<Decimal>,
    /// Currency of `target_sale_price`
    #[serde(default)]
    pub target_sale_price_currency: Option<String>,

    /// Discount, e.g. `"35%"`
    #[serde(default)]
    pub discount: Option<String>,
    /// Commission rate, e.g. `"7.0%"`
    #[serde(default)]
    pub commission_rate: Option<String>,
    /// Commission rate for hot links
    #[serde(default)]
    pub hot_product_commission_rate: Option<String>,
    /// Relevant market commission rate
    #[serde(default)]
    pub relevant_market_commission_rate: Option<String>,
    /// Positive feedback rate
    #[serde(default)]
    pub evaluate_rate: Option<String>,

    /// First level category id
    #[serde(default)]
    pub first_level_category_id: Option<i64>,
    /// First level category name
    #[serde(default)]
    pub first_level_category_name: Option<String>,
    /// Second level category id
    #[serde(default)]
    pub second_level_category_id: Option<i64>,
    /// Second level category name
    #[serde(default)]
    pub second_level_category_name: Option<String>,

    /// Shop id
    #[serde(default)]
    pub shop_id: Option<i64>,
    /// Shop URL
    #[serde(default)]
    pub shop_url: Option<String>,

    /// Units sold in the last 30 days
    #[serde(default)]
    pub latest_volume: Option<i64>,

    /// Any other field returned by the gateway
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl From<RawProduct> for Product {
    fn from(p: RawProduct) -> Self {
        Self {
            product_id: p.product_id,
            product_title: p.product_title,
            product_detail_url: p.product_detail_url,
            product_main_image_url: p.product_main_image_url,
            product_small_image_urls: p
                .product_small_image_urls
                .map(|list| list.string)
                .unwrap_or_default(),
            product_video_url: p.product_video_url,
            promotion_link: p.promotion_link,
            app_sale_price: p.app_sale_price,
            app_sale_price_currency: p.app_sale_price_currency,
            original_price: p.original_price,
            original_price_currency: p.original_price_currency,
            sale_price: p.sale_price,
            sale_price_currency: p.sale_price_currency,
            target_app_sale_price: p.target_app_sale_price,
            target_app_sale_price_currency: p.target_app_sale_price_currency,
            target_original_price: p.target_original_price,
            target_original_price_currency: p.target_original_price_currency,
            target_sale_price: p.target_sale_price,
            target_sale_price_currency: p.target_sale_price_currency,
            discount: p.discount,
            commission_rate: p.commission_rate,
            hot_product_commission_rate: p.hot_product_commission_rate,
            relevant_market_commission_rate: p.relevant_market_commission_rate,
            evaluate_rate: p.evaluate_rate,
            first_level_category_id: p.first_level_category_id,
            first_level_category_name: p.first_level_category_name,
            second_level_category_id: p.second_level_category_id,
            second_level_category_name: p.second_level_category_name,
            shop_id: p.shop_id,
            shop_url: p.shop_url,
            latest_volume: p.lastest_volume,
            extra: p.extra,
        }
    }
}

/// Apply the product transform to a list of raw records, keeping order.
pub(crate) fn parse_products(raw: Vec<RawProduct>) -> Vec<Product> {
    raw.into_iter().map(Product::from).collect()
}

/// A page of products returned by a product search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    /// Page number of this result
    pub current_page_no: Option<i64>,
    /// Number of products in this page
    pub current_record_count: u64,
    /// Number of products matching the search
    pub total_record_count: Option<i64>,
    /// The products, in gateway order
    pub products: Vec<Product>,
}

/// A page of hot products; same shape as [`ProductsResponse`].
pub type HotProductsResponse = ProductsResponse;

impl From<ProductsResult> for ProductsResponse {
    fn from(r: ProductsResult) -> Self {
        Self {
            current_page_no: r.current_page_no,
            current_record_count: r.current_record_count,
            total_record_count: r.total_record_count,
            products: parse_products(r.products.map(|p| p.product).unwrap_or_default()),
        }
    }
}

/// Products recommended by smart match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartMatchResponse {
    /// Page number of this result
    pub current_page_no: Option<i64>,
    /// Number of products in this page
    pub current_record_count: u64,
    /// Number of products available
    pub total_record_count: Option<i64>,
    /// Whether this is the last page
    pub is_finished: Option<bool>,
    /// The recommended products
    pub products: Vec<Product>,
}

impl From<ProductsResult> for SmartMatchResponse {
    fn from(r: ProductsResult) -> Self {
        Self {
            current_page_no: r.current_page_no,
            current_record_count: r.current_record_count,
            total_record_count: r.total_record_count,
            is_finished: r.is_finished,
            products: parse_products(r.products.map(|p| p.product).unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample_raw_product() -> RawProduct {
        serde_json::from_value(json!({
            "product_id": 1005003091506814i64,
            "product_title": "USB C Cable",
            "product_small_image_urls": {
                "string": [
                    "https://ae01.alicdn.com/kf/a.jpg",
                    "https://ae01.alicdn.com/kf/b.jpg"
                ]
            },
            "sale_price": "3.41",
            "sale_price_currency": "USD",
            "target_sale_price": 3.1,
            "lastest_volume": 2150,
            "first_level_category_id": "44",
            "shop_id": 912345678,
            "platform_product_type": "PLAZA"
        }))
        .unwrap()
    }

    #[test]
    fn test_product_transform() {
        let product = Product::from(sample_raw_product());

        assert_eq!(product.product_id, "1005003091506814");
        assert_eq!(product.product_small_image_urls.len(), 2);
        assert_eq!(
            product.product_small_image_urls[0],
            "https://ae01.alicdn.com/kf/a.jpg"
        );
        assert_eq!(product.latest_volume, Some(2150));
        assert_eq!(product.sale_price, Some(dec!(3.41)));
        assert_eq!(product.target_sale_price, Some(dec!(3.1)));
        assert_eq!(product.first_level_category_id, Some(44));
        assert_eq!(product.shop_id, Some(912345678));
        assert_eq!(product.extra.get("platform_product_type"), Some(&json!("PLAZA")));
        assert!(!product.extra.contains_key("lastest_volume"));
    }

    #[test]
    fn test_missing_image_list_is_empty() {
        let raw: RawProduct = serde_json::from_value(json!({ "product_id": "1" })).unwrap();
        let product = Product::from(raw);
        assert!(product.product_small_image_urls.is_empty());
        assert_eq!(product.latest_volume, None);
    }

    #[test]
    fn test_products_response_keeps_order() {
        let result: ProductsResult = serde_json::from_value(json!({
            "current_page_no": 1,
            "current_record_count": 2,
            "total_record_count": 120,
            "products": { "product": [ { "product_id": "2" }, { "product_id": "1" } ] }
        }))
        .unwrap();

        let response = ProductsResponse::from(result);
        assert_eq!(response.current_record_count, 2);
        assert_eq!(response.total_record_count, Some(120));
        let ids: Vec<&str> = response.products.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
