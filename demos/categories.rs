//! Category tree example.
//!
//! Prints every parent category with its children. Only the first call
//! reaches the API; the rest are served from the client's category cache.
//!
//! Run with: cargo run --example categories

use aliexpress_rs::AliexpressClient;

#[tokio::main]
async fn main() -> aliexpress_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = AliexpressClient::from_env()?;
    let categories = client.categories();

    let parents = categories.parents(true).await?;
    println!("Found {} parent categories:", parents.len());

    for parent in &parents {
        println!("- {} ({})", parent.category_name, parent.category_id);
        for child in categories.children(parent.category_id, true).await? {
            println!("    - {} ({})", child.category_name, child.category_id);
        }
    }

    Ok(())
}
