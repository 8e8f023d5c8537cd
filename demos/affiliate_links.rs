//! Affiliate link example.
//!
//! Converts product URLs passed on the command line into affiliate links.
//! Requires ALIEXPRESS_TRACKING_ID.
//!
//! Run with: cargo run --example affiliate_links -- https://aliexpress.com/item/1005003091506814.html

use aliexpress_rs::{AliexpressClient, Error, LinkType};

#[tokio::main]
async fn main() -> aliexpress_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("Usage: affiliate_links <url> [<url> ...]");
        return Ok(());
    }

    let client = AliexpressClient::from_env()?;

    match client.links().generate(urls, LinkType::Normal).await {
        Ok(links) => {
            for link in links {
                println!("{}\n  -> {}", link.source_value, link.promotion_link);
            }
        }
        Err(Error::InvalidTrackingId(message)) => {
            eprintln!("{} (set ALIEXPRESS_TRACKING_ID)", message);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
