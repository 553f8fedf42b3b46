//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::{PostStore, StoreError};
use blog_infra::store::{StoreConfig, open_store};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    /// Open the configured post store.
    pub async fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = open_store(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Release the backend. Errors are logged, shutdown continues.
    pub async fn shutdown(&self) {
        if let Err(e) = self.store.close().await {
            tracing::warn!(error = %e, "Failed to close post store cleanly");
        }
    }
}
