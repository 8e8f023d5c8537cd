//! Orders service for affiliate order reports.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::client::{ClientInner, Operation};
use crate::models::primitives::join_list;
use crate::models::wire::OrdersResult;
use crate::models::{ListParam, OrderListResponse};
use crate::{Error, Result};

const ORDER_LIST: Operation = Operation::new("aliexpress.affiliate.order.list");

/// Format the gateway expects for order time bounds.
pub const ORDER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Service for affiliate order operations.
///
/// # Example
///
/// ```no_run
/// use aliexpress_rs::api::OrderListQuery;
/// use chrono::NaiveDate;
///
/// # async fn example(client: aliexpress_rs::AliexpressClient) -> aliexpress_rs::Result<()> {
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(23, 59, 59).unwrap();
///
/// let query = OrderListQuery::new("Payment Completed", start, end).page_size(50);
/// let page = client.orders().list(query).await?;
/// for order in &page.orders {
///     println!("{} {:?}", order.order_id, order.paid_amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing orders.
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    /// Order status, e.g. `"Payment Completed"` or `"Buyer Confirmed Receipt"`
    pub status: String,
    /// Start of the reporting window
    pub start_time: NaiveDateTime,
    /// End of the reporting window
    pub end_time: NaiveDateTime,
    /// Fields to include in the results; all when absent
    pub fields: Option<ListParam>,
    /// Site the orders were placed on, e.g. `"ru_site"`
    pub locale_site: Option<String>,
    /// Page number
    pub page_no: Option<u32>,
    /// Orders per page
    pub page_size: Option<u32>,
}

impl OrderListQuery {
    /// Create a query for orders in `status` within a time window.
    pub fn new(status: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            status: status.into(),
            start_time,
            end_time,
            fields: None,
            locale_site: None,
            page_no: None,
            page_size: None,
        }
    }

    /// Restrict the returned fields.
    pub fn fields(mut self, fields: impl Into<ListParam>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Filter by locale site.
    pub fn locale_site(mut self, locale_site: impl Into<String>) -> Self {
        self.locale_site = Some(locale_site.into());
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
}

#[derive(Serialize)]
struct OrderListRequest<'a> {
    app_signature: Option<&'a str>,
    start_time: String,
    end_time: String,
    fields: Option<String>,
    locale_site: Option<&'a str>,
    page_no: Option<u32>,
    page_size: Option<u32>,
    status: &'a str,
}

impl<'a> OrderListRequest<'a> {
    fn new(query: &'a OrderListQuery, app_signature: Option<&'a str>) -> Self {
        Self {
            app_signature,
            start_time: query.start_time.format(ORDER_TIME_FORMAT).to_string(),
            end_time: query.end_time.format(ORDER_TIME_FORMAT).to_string(),
            fields: join_list(query.fields.as_ref()),
            locale_site: query.locale_site.as_deref(),
            page_no: query.page_no,
            page_size: query.page_size,
            status: &query.status,
        }
    }
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get affiliate orders within a time window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrdersNotFound`] if no orders match.
    pub async fn list(&self, query: OrderListQuery) -> Result<OrderListResponse> {
        let request = OrderListRequest::new(&query, self.inner.credentials.app_signature());
        let result: OrdersResult = self.inner.execute(ORDER_LIST, &request).await?;

        if result.current_record_count == 0 {
            return Err(Error::OrdersNotFound(
                "No orders found for the specified parameters".to_string(),
            ));
        }

        Ok(OrderListResponse::from(result))
    }
}
