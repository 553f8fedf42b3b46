use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use blog_core::{PostStore, StoreError};

use super::file::JsonFilePostStore;

pub const DEFAULT_DATA_PATH: &str = "./seeds/blogs.json";
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "blog-party-dev";
pub const DEFAULT_COLLECTION: &str = "blogs";

/// Which backend to build, and how. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    File(FileStoreConfig),
    Document(DocumentStoreConfig),
}

/// Configuration for the JSON file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStoreConfig {
    pub path: PathBuf,
}

/// Configuration for the MongoDB store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStoreConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout: Duration,
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            database: DEFAULT_DATABASE_NAME.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown STORE_BACKEND '{0}' (expected 'file' or 'document')")]
    UnknownBackend(String),
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// - `STORE_BACKEND`: `file` (default) or `document`
    /// - `BLOG_DATA_PATH`: JSON file location
    /// - `DATABASE_URL`, `DATABASE_NAME`, `DATABASE_COLLECTION`, `DATABASE_CONNECT_TIMEOUT_SECS`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "file".to_string());

        match backend.to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File(FileStoreConfig {
                path: lookup("BLOG_DATA_PATH")
                    .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
                    .into(),
            })),
            "document" | "mongodb" => {
                let defaults = DocumentStoreConfig::default();
                Ok(Self::Document(DocumentStoreConfig {
                    url: lookup("DATABASE_URL").unwrap_or(defaults.url),
                    database: lookup("DATABASE_NAME").unwrap_or(defaults.database),
                    collection: lookup("DATABASE_COLLECTION").unwrap_or(defaults.collection),
                    connect_timeout: lookup("DATABASE_CONNECT_TIMEOUT_SECS")
                        .and_then(|s| s.parse().ok())
                        .map(Duration::from_secs)
                        .unwrap_or(defaults.connect_timeout),
                }))
            }
            _ => Err(ConfigError::UnknownBackend(backend)),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Document(_) => "document",
        }
    }
}

/// Open the configured backend.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn PostStore>, StoreError> {
    tracing::info!(backend = config.backend_name(), "Opening post store...");

    match config {
        StoreConfig::File(file) => {
            let store = JsonFilePostStore::open(&file.path).await?;
            tracing::info!(path = %file.path.display(), "JSON file post store ready");
            Ok(Arc::new(store))
        }
        #[cfg(feature = "document")]
        StoreConfig::Document(document) => {
            let store = super::document::MongoPostStore::connect(document).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "document"))]
        StoreConfig::Document(_) => Err(StoreError::Unavailable(
            "document backend requires the `document` feature".to_string(),
        )),
    }
}
