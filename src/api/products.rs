//! Products service: product details, product searches and smart match.

use serde::Serialize;
use std::sync::Arc;

use crate::auth::Credentials;
use crate::client::{ClientInner, Operation};
use crate::models::primitives::join_list;
use crate::models::product::parse_products;
use crate::models::wire::ProductsResult;
use crate::models::{
    parse_product_ids, Currency, HotProductsResponse, Language, ListParam, Product, ProductType,
    ProductsResponse, SmartMatchResponse, SortBy,
};
use crate::{Error, Result};

const PRODUCT_DETAIL: Operation = Operation::new("aliexpress.affiliate.productdetail.get");
const HOT_PRODUCT_QUERY: Operation = Operation::new("aliexpress.affiliate.hotproduct.query");
const PRODUCT_QUERY: Operation = Operation::new("aliexpress.affiliate.product.query");
const PRODUCT_SMART_MATCH: Operation = Operation::new("aliexpress.affiliate.product.smartmatch");

const NO_PRODUCTS: &str = "No products found with current parameters";

/// Service for product operations.
///
/// # Example
///
/// ```no_run
/// use aliexpress_rs::api::ProductSearchQuery;
/// use aliexpress_rs::models::SortBy;
///
/// # async fn example(client: aliexpress_rs::AliexpressClient) -> aliexpress_rs::Result<()> {
/// let query = ProductSearchQuery::new()
///     .keywords("mechanical keyboard")
///     .sort(SortBy::LastVolumeDesc)
///     .page_size(20);
///
/// let page = client.products().search(query).await?;
/// for product in &page.products {
///     println!("{}: {:?}", product.product_id, product.product_title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

/// Optional filters for [`ProductsService::details`].
#[derive(Debug, Default, Clone)]
pub struct ProductDetailsQuery {
    /// Fields to include in the results; all when absent
    pub fields: Option<ListParam>,
    /// Only products that ship to this country; prices follow its tax policy
    pub country: Option<String>,
}

impl ProductDetailsQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the returned fields.
    pub fn fields(mut self, fields: impl Into<ListParam>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Filter by destination country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Filters for [`ProductsService::search`] and [`ProductsService::hot`].
///
/// Prices are in the lowest currency denomination: $31.41 is `3141`.
#[derive(Debug, Default, Clone)]
pub struct ProductSearchQuery {
    /// One or more category ids
    pub category_ids: Option<ListParam>,
    /// Estimated delivery days
    pub delivery_days: Option<u32>,
    /// Fields to include in the results; all when absent
    pub fields: Option<ListParam>,
    /// Search keywords
    pub keywords: Option<String>,
    /// Only products priced below this value
    pub max_sale_price: Option<u64>,
    /// Only products priced above this value
    pub min_sale_price: Option<u64>,
    /// Page number
    pub page_no: Option<u32>,
    /// Products per page, 1 to 50
    pub page_size: Option<u32>,
    /// Platform product type
    pub platform_product_type: Option<ProductType>,
    /// Only products that ship to this country
    pub ship_to_country: Option<String>,
    /// Sort order
    pub sort: Option<SortBy>,
}

impl ProductSearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by one or more category ids.
    pub fn category_ids(mut self, ids: impl Into<ListParam>) -> Self {
        self.category_ids = Some(ids.into());
        self
    }

    /// Filter by estimated delivery days.
    pub fn delivery_days(mut self, days: u32) -> Self {
        self.delivery_days = Some(days);
        self
    }

    /// Restrict the returned fields.
    pub fn fields(mut self, fields: impl Into<ListParam>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Search by keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set the price range, in the lowest currency denomination.
    pub fn price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_sale_price = min;
        self.max_sale_price = max;
        self
    }

    /// Select a page.
    pub fn page_no(mut self, page_no: u32) -> Self {
        self.page_no = Some(page_no);
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Filter by platform product type.
    pub fn platform_product_type(mut self, product_type: ProductType) -> Self {
        self.platform_product_type = Some(product_type);
        self
    }

    /// Filter by destination country.
    pub fn ship_to_country(mut self, country: impl Into<String>) -> Self {
        self.ship_to_country = Some(country.into());
        self
    }

    /// Set the sort order.
    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Targeting signals for [`ProductsService::smart_match`].
///
/// Unlike the other product operations, currency, language and tracking id
/// are taken from the query only, never from the client defaults.
#[derive(Debug, Clone)]
pub struct SmartMatchQuery {
    /// Unique device id (required)
    pub device_id: String,
    /// App information
    pub app: Option<String>,
    /// Country code of the target location
    pub country: Option<String>,
    /// Device type, e.g. `"mobile"`
    pub device: Option<String>,
    /// Fields to include in the results; all when absent
    pub fields: Option<ListParam>,
    /// Keywords
    pub keywords: Option<String>,
    /// Page number
    pub page_no: Option<u32>,
    /// Product to match against
    pub product_id: Option<String>,
    /// Site information
    pub site: Option<String>,
    /// Currency for prices
    pub target_currency: Option<Currency>,
    /// Language for results
    pub target_language: Option<Language>,
    /// Tracking id for the returned links
    pub tracking_id: Option<String>,
    /// User identifier
    pub user: Option<String>,
}

impl SmartMatchQuery {
    /// Create a query for a device.
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            app: None,
            country: None,
            device: None,
            fields: None,
            keywords: None,
            page_no: None,
            product_id: None,
            site: None,
            target_currency: None,
            target_language: None,
            tracking_id: None,
            user: None,
        }
    }

    /// Set the app information.
    pub fn app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    /// Set the target country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the device type.
    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Restrict the returned fields.
    pub fn fields(mut self, fields: impl Into<ListParam>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Set keywords.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Select a page.
    pub fn page_no(mut self, page_no: u32) -> Self {
        self.page_no = Some(page_no);
        self
    }

    /// Match against a product.
    pub fn product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Set the site information.
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Set the price currency.
    pub fn target_currency(mut self, currency: Currency) -> Self {
        self.target_currency = Some(currency);
        self
    }

    /// Set the result language.
    pub fn target_language(mut self, language: Language) -> Self {
        self.target_language = Some(language);
        self
    }

    /// Set the tracking id.
    pub fn tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    /// Set the user identifier.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

#[derive(Serialize)]
struct ProductDetailRequest<'a> {
    app_signature: Option<&'a str>,
    fields: Option<String>,
    product_ids: Option<String>,
    country: Option<&'a str>,
    target_currency: Currency,
    target_language: Language,
    tracking_id: Option<&'a str>,
}

#[derive(Serialize)]
struct ProductQueryRequest<'a> {
    app_signature: Option<&'a str>,
    category_ids: Option<String>,
    delivery_days: Option<String>,
    fields: Option<String>,
    keywords: Option<&'a str>,
    max_sale_price: Option<u64>,
    min_sale_price: Option<u64>,
    page_no: Option<u32>,
    page_size: Option<u32>,
    platform_product_type: Option<ProductType>,
    ship_to_country: Option<&'a str>,
    sort: Option<SortBy>,
    target_currency: Currency,
    target_language: Language,
    tracking_id: Option<&'a str>,
}

impl<'a> ProductQueryRequest<'a> {
    fn new(query: &'a ProductSearchQuery, credentials: &'a Credentials) -> Self {
        Self {
            app_signature: credentials.app_signature(),
            category_ids: join_list(query.category_ids.as_ref()),
            delivery_days: query.delivery_days.map(|d| d.to_string()),
            fields: join_list(query.fields.as_ref()),
            keywords: query.keywords.as_deref(),
            max_sale_price: query.max_sale_price,
            min_sale_price: query.min_sale_price,
            page_no: query.page_no,
            page_size: query.page_size,
            platform_product_type: query.platform_product_type,
            ship_to_country: query.ship_to_country.as_deref(),
            sort: query.sort,
            target_currency: credentials.currency(),
            target_language: credentials.language(),
            tracking_id: credentials.tracking_id(),
        }
    }
}

#[derive(Serialize)]
struct SmartMatchRequest<'a> {
    app: Option<&'a str>,
    app_signature: Option<&'a str>,
    country: Option<&'a str>,
    device: Option<&'a str>,
    device_id: &'a str,
    fields: Option<String>,
    keywords: Option<&'a str>,
    page_no: Option<u32>,
    product_id: Option<&'a str>,
    site: Option<&'a str>,
    target_currency: Option<Currency>,
    target_language: Option<Language>,
    tracking_id: Option<&'a str>,
    user: Option<&'a str>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get product information for one or more product ids or URLs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if an id cannot be parsed, and
    /// [`Error::ProductsNotFound`] if nothing matched.
    pub async fn details(
        &self,
        product_ids: impl Into<ListParam>,
        query: Option<ProductDetailsQuery>,
    ) -> Result<Vec<Product>> {
        let product_ids = parse_product_ids(&product_ids.into())?;
        let query = query.unwrap_or_default();
        let credentials = &self.inner.credentials;

        let request = ProductDetailRequest {
            app_signature: credentials.app_signature(),
            fields: join_list(query.fields.as_ref()),
            product_ids: product_ids.joined(),
            country: query.country.as_deref(),
            target_currency: credentials.currency(),
            target_language: credentials.language(),
            tracking_id: credentials.tracking_id(),
        };

        let result: ProductsResult = self.inner.execute(PRODUCT_DETAIL, &request).await?;

        if result.current_record_count == 0 {
            return Err(Error::ProductsNotFound(NO_PRODUCTS.to_string()));
        }

        Ok(parse_products(
            result.products.map(|p| p.product).unwrap_or_default(),
        ))
    }

    /// Search affiliate products with high commission.
    pub async fn hot(&self, query: ProductSearchQuery) -> Result<HotProductsResponse> {
        self.query(HOT_PRODUCT_QUERY, &query).await
    }

    /// Search affiliate products.
    pub async fn search(&self, query: ProductSearchQuery) -> Result<ProductsResponse> {
        self.query(PRODUCT_QUERY, &query).await
    }

    async fn query(
        &self,
        operation: Operation,
        query: &ProductSearchQuery,
    ) -> Result<ProductsResponse> {
        let request = ProductQueryRequest::new(query, &self.inner.credentials);
        let result: ProductsResult = self.inner.execute(operation, &request).await?;

        if result.current_record_count == 0 {
            return Err(Error::ProductsNotFound(NO_PRODUCTS.to_string()));
        }

        Ok(ProductsResponse::from(result))
    }

    /// Recommend products from device and user targeting signals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProductsNotFound`] if the response carries no
    /// products.
    pub async fn smart_match(&self, query: SmartMatchQuery) -> Result<SmartMatchResponse> {
        let request = SmartMatchRequest {
            app: query.app.as_deref(),
            app_signature: self.inner.credentials.app_signature(),
            country: query.country.as_deref(),
            device: query.device.as_deref(),
            device_id: &query.device_id,
            fields: join_list(query.fields.as_ref()),
            keywords: query.keywords.as_deref(),
            page_no: query.page_no,
            product_id: query.product_id.as_deref(),
            site: query.site.as_deref(),
            target_currency: query.target_currency,
            target_language: query.target_language,
            tracking_id: query.tracking_id.as_deref(),
            user: query.user.as_deref(),
        };

        let result: ProductsResult = self.inner.execute(PRODUCT_SMART_MATCH, &request).await?;

        let has_products = result
            .products
            .as_ref()
            .is_some_and(|list| !list.product.is_empty());
        if !has_products {
            return Err(Error::ProductsNotFound(NO_PRODUCTS.to_string()));
        }

        Ok(SmartMatchResponse::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::request::to_params;

    fn credentials() -> Credentials {
        Credentials::new("key", "secret", Language::Es, Currency::Eur)
            .with_tracking_id("abc123")
            .with_app_signature("sig")
    }

    #[test]
    fn test_product_query_request_fields() {
        let query = ProductSearchQuery::new()
            .category_ids(vec!["3", "15"])
            .delivery_days(5)
            .keywords("usb cable")
            .price_range(Some(100), Some(3141))
            .page_size(50)
            .platform_product_type(ProductType::Plaza)
            .sort(SortBy::SalePriceDesc);
        let credentials = credentials();

        let params = to_params(&ProductQueryRequest::new(&query, &credentials)).unwrap();

        assert_eq!(params["category_ids"], "3,15");
        assert_eq!(params["delivery_days"], "5");
        assert_eq!(params["keywords"], "usb cable");
        assert_eq!(params["min_sale_price"], "100");
        assert_eq!(params["max_sale_price"], "3141");
        assert_eq!(params["page_size"], "50");
        assert_eq!(params["platform_product_type"], "PLAZA");
        assert_eq!(params["sort"], "SALE_PRICE_DESC");
        assert_eq!(params["target_currency"], "EUR");
        assert_eq!(params["target_language"], "ES");
        assert_eq!(params["tracking_id"], "abc123");
        assert_eq!(params["app_signature"], "sig");
        assert!(!params.contains_key("page_no"));
        assert!(!params.contains_key("fields"));
    }
}
