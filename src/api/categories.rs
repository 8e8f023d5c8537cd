//! Categories service with a client-wide category cache.

use serde::Serialize;
use std::sync::Arc;

use crate::client::{ClientInner, Operation};
use crate::models::wire::CategoriesResult;
use crate::models::{filter_child_categories, filter_parent_categories, Category};
use crate::{Error, Result};

const CATEGORY_GET: Operation = Operation::new("aliexpress.affiliate.category.get");

/// Service for category operations.
///
/// Every successful [`list`](Self::list) replaces the category cache shared
/// by all clones of the client. [`parents`](Self::parents) and
/// [`children`](Self::children) read from that cache, fetching first when it
/// is empty or when `use_cache` is false.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: aliexpress_rs::AliexpressClient) -> aliexpress_rs::Result<()> {
/// for parent in client.categories().parents(true).await? {
///     let children = client.categories().children(parent.category_id, true).await?;
///     println!("{} ({} children)", parent.category_name, children.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct CategoryGetRequest<'a> {
    app_signature: Option<&'a str>,
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get all available categories, both parent and child.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CategoriesNotFound`] if the API reports no
    /// categories. The cache is left untouched in that case.
    pub async fn list(&self) -> Result<Vec<Category>> {
        let request = CategoryGetRequest {
            app_signature: self.inner.credentials.app_signature(),
        };

        let result: CategoriesResult = self.inner.execute(CATEGORY_GET, &request).await?;

        if result.total_result_count == 0 {
            return Err(Error::CategoriesNotFound(
                "No categories found".to_string(),
            ));
        }

        let categories = result.categories.map(|c| c.category).unwrap_or_default();
        *self.inner.categories.write().await = Some(categories.clone());
        tracing::debug!(count = categories.len(), "Category cache refreshed");

        Ok(categories)
    }

    /// Get all top-level categories.
    pub async fn parents(&self, use_cache: bool) -> Result<Vec<Category>> {
        let categories = self.cached(use_cache).await?;
        Ok(filter_parent_categories(&categories))
    }

    /// Get the child categories of `parent_id`.
    ///
    /// An unknown parent id yields an empty list.
    pub async fn children(&self, parent_id: i64, use_cache: bool) -> Result<Vec<Category>> {
        let categories = self.cached(use_cache).await?;
        Ok(filter_child_categories(&categories, parent_id))
    }

    async fn cached(&self, use_cache: bool) -> Result<Vec<Category>> {
        if use_cache {
            let cache = self.inner.categories.read().await;
            if let Some(categories) = cache.as_ref().filter(|c| !c.is_empty()) {
                tracing::debug!(count = categories.len(), "Using cached categories");
                return Ok(categories.clone());
            }
        }

        tracing::debug!(use_cache, "Fetching categories");
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::MockTransport;
    use crate::{AliexpressClient, Credentials, Currency, Error, Language};
    use serde_json::{json, Value};

    fn category_body(count: u64) -> Value {
        let categories: Vec<Value> = [
            json!({ "category_id": 1, "category_name": "Computers" }),
            json!({ "category_id": 11, "category_name": "Laptops", "parent_category_id": 100 }),
            json!({ "category_id": 12, "category_name": "Tablets", "parent_category_id": 200 }),
        ]
        .into_iter()
        .take(count as usize)
        .collect();

        json!({
            "aliexpress_affiliate_category_get_response": {
                "resp_result": {
                    "resp_code": 200,
                    "resp_msg": "Call succeeds",
                    "result": {
                        "total_result_count": count,
                        "categories": { "category": categories }
                    }
                }
            }
        })
    }

    fn client(transport: MockTransport) -> AliexpressClient {
        let credentials = Credentials::new("12345", "secret", Language::En, Currency::Usd);
        AliexpressClient::with_transport(credentials, transport)
    }

    #[tokio::test]
    async fn test_parents_reuses_cache() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.method() == "aliexpress.affiliate.category.get")
            .times(1)
            .returning(|_| Ok(category_body(3)));
        let client = client(transport);

        let parents = client.categories().parents(true).await.unwrap();
        let children = client.categories().children(100, true).await.unwrap();

        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].category_id, 1);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].category_id, 11);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(2)
            .returning(|_| Ok(category_body(3)));
        let client = client(transport);

        client.categories().list().await.unwrap();
        let children = client.categories().children(200, false).await.unwrap();

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].category_name, "Tablets");
    }

    #[tokio::test]
    async fn test_clones_share_cache() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(1)
            .returning(|_| Ok(category_body(3)));
        let client = client(transport);
        let other = client.clone();

        client.categories().list().await.unwrap();
        let parents = other.categories().parents(true).await.unwrap();

        assert_eq!(parents.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_keeps_cache_empty() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(2)
            .returning(|_| Ok(category_body(0)));
        let client = client(transport);

        let err = client.categories().list().await.unwrap_err();
        assert!(matches!(err, Error::CategoriesNotFound(ref m) if m == "No categories found"));

        // Cache still empty, so this fetches again.
        let err = client.categories().parents(true).await.unwrap_err();
        assert!(matches!(err, Error::CategoriesNotFound(_)));
    }
}
