//! Product search example.
//!
//! Searches products by keyword, then fetches full details for the first
//! result.
//!
//! Run with: cargo run --example product_search -- "mechanical keyboard"

use aliexpress_rs::api::ProductSearchQuery;
use aliexpress_rs::{AliexpressClient, SortBy};

#[tokio::main]
async fn main() -> aliexpress_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let keywords = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mechanical keyboard".to_string());

    // Reads ALIEXPRESS_APP_KEY, ALIEXPRESS_APP_SECRET and optional defaults
    let client = AliexpressClient::from_env()?;

    let query = ProductSearchQuery::new()
        .keywords(&keywords)
        .sort(SortBy::LastVolumeDesc)
        .page_size(10);

    let page = client.products().search(query).await?;
    println!(
        "Found {:?} products for \"{}\" (showing {}):",
        page.total_record_count,
        keywords,
        page.products.len()
    );

    for product in &page.products {
        println!(
            "  - [{}] {} {:?} {}",
            product.product_id,
            product.product_title.as_deref().unwrap_or("(untitled)"),
            product.target_sale_price,
            product.target_sale_price_currency.as_deref().unwrap_or(""),
        );
    }

    if let Some(first) = page.products.first() {
        let details = client
            .products()
            .details(first.product_id.as_str(), None)
            .await?;
        println!("\nDetails for {}:", first.product_id);
        for product in details {
            println!("  URL: {:?}", product.product_detail_url);
            println!("  Images: {}", product.product_small_image_urls.len());
            println!("  Sold (30 days): {:?}", product.latest_volume);
        }
    }

    Ok(())
}
