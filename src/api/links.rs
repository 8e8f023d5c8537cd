//! Affiliate links service.

use serde::Serialize;
use std::sync::Arc;

use crate::client::{ClientInner, Operation};
use crate::models::wire::LinksResult;
use crate::models::{AffiliateLink, LinkType, ListParam};
use crate::{Error, Result};

const LINK_GENERATE: Operation = Operation::new("aliexpress.affiliate.link.generate");

/// Service for converting links into affiliate links.
///
/// Requires a tracking id on the client's [`Credentials`](crate::Credentials).
pub struct LinksService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct LinkGenerateRequest<'a> {
    app_signature: Option<&'a str>,
    source_values: Option<String>,
    promotion_link_type: LinkType,
    tracking_id: &'a str,
}

impl LinksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Convert a list of links into affiliate links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTrackingId`] without contacting the API when
    /// no tracking id is configured, [`Error::InvalidArgument`] when no links
    /// are given, and [`Error::ProductsNotFound`] when no links could be
    /// generated.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aliexpress_rs::models::LinkType;
    ///
    /// # async fn example(client: aliexpress_rs::AliexpressClient) -> aliexpress_rs::Result<()> {
    /// let links = client
    ///     .links()
    ///     .generate("https://aliexpress.com/item/1005003091506814.html", LinkType::Normal)
    ///     .await?;
    /// println!("{}", links[0].promotion_link);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(
        &self,
        links: impl Into<ListParam>,
        link_type: LinkType,
    ) -> Result<Vec<AffiliateLink>> {
        let credentials = &self.inner.credentials;
        let tracking_id = credentials.tracking_id().ok_or_else(|| {
            Error::InvalidTrackingId("The tracking id is required for affiliate links".to_string())
        })?;

        let links = links.into();
        let source_values = links.joined();
        if source_values.is_none() {
            return Err(Error::InvalidArgument(
                "at least one link is required".to_string(),
            ));
        }

        let request = LinkGenerateRequest {
            app_signature: credentials.app_signature(),
            source_values,
            promotion_link_type: link_type,
            tracking_id,
        };

        let result: LinksResult = self.inner.execute(LINK_GENERATE, &request).await?;

        if result.total_result_count == 0 {
            return Err(Error::ProductsNotFound(
                "Affiliate links not available".to_string(),
            ));
        }

        Ok(result
            .promotion_links
            .map(|list| list.promotion_link)
            .unwrap_or_default())
    }
}
