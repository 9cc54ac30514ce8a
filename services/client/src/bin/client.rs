//! services/client/src/bin/client.rs

use std::sync::Arc;
use std::time::Duration;

use bookhaven_core::catalog::CatalogStore;
use client_lib::{
    adapters::{JsonFileStore, TracingNotifier, UuidIdGenerator},
    config::Config,
    error::AppError,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Opening catalog...");

    // --- 2. Build the Port Adapters ---
    let storage = Arc::new(JsonFileStore::new(&config.data_dir).await?);
    info!("Catalog data lives in {}", storage.root().display());
    let notifier = Arc::new(TracingNotifier);
    let ids = Arc::new(UuidIdGenerator);

    // --- 3. Open the Catalog Store for This Session ---
    let catalog = CatalogStore::open(storage, notifier, ids, config.load_delay).await;
    while catalog.is_loading() {
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    info!(
        "Catalog ready: {} books, {} favorites",
        catalog.books().len(),
        catalog.favorite_book_ids().len()
    );

    // --- 4. Run a One-Shot Search When Asked ---
    if let Some(query) = std::env::args().nth(1) {
        let hits = catalog.search_books(&query);
        info!("{} book(s) match '{}':", hits.len(), query);
        for book in hits {
            info!("  {} by {} ({})", book.title, book.author, book.year);
        }
    }

    Ok(())
}
