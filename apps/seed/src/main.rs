//! Reseed CLI.
//!
//! Usage: `seed [PATH]` (default `./seeds/seed-posts.json`). The file holds a
//! JSON array of `{author?, title?, body?, tags?}` records; extra keys such as
//! `id` or `createdAt` are ignored, so an exported collection works too.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use blog_core::{CreateFields, PostStore, StoreError};
use blog_infra::store::{StoreConfig, open_store};

/// Kept apart from the file store's default collection so a reseed never wipes its own input.
const DEFAULT_SEED_PATH: &str = "./seeds/seed-posts.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("variables.env").ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH));
    let seeds = load_seeds(&path).await?;

    let config = StoreConfig::from_env()?;
    let store = open_store(&config).await?;

    let result = reseed(store.as_ref(), seeds).await;
    store.close().await?;
    let count = result?;

    tracing::info!(count, backend = config.backend_name(), "Seeded data");
    Ok(())
}

async fn load_seeds(path: &Path) -> anyhow::Result<Vec<CreateFields>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read seed file: {}", path.display()))?;
    serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse seed file: {}", path.display()))
}

/// Remove every post, then create one per seed record. Returns the number created.
async fn reseed(store: &dyn PostStore, seeds: Vec<CreateFields>) -> Result<usize, StoreError> {
    let existing = store.list().await?;
    tracing::info!(count = existing.len(), "Removing data...");
    for post in existing {
        match store.delete_by_id(&post.id).await {
            // Someone else got there first.
            Ok(()) | Err(StoreError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    tracing::info!(count = seeds.len(), "Seeding data...");
    let count = seeds.len();
    for fields in seeds {
        store.create(fields).await?;
    }
    Ok(count)
}
