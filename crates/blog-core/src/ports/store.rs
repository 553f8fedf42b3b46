use async_trait::async_trait;

use crate::domain::{CreateFields, Post, UpdateFields};
use crate::error::StoreError;

/// Post store trait - abstraction over persistence backends (JSON file, document database).
///
/// The store owns id and timestamp assignment. Implementations never log;
/// every failure comes back as a [`StoreError`] for the caller to map.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post, applying defaults for absent fields.
    async fn create(&self, fields: CreateFields) -> Result<Post, StoreError>;

    /// All posts, oldest first. Empty store yields an empty vec.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Exact match on `id`.
    async fn get_by_id(&self, id: &str) -> Result<Post, StoreError>;

    /// Replace only the supplied fields and bump `updated_at`.
    async fn update_by_id(&self, id: &str, fields: UpdateFields) -> Result<Post, StoreError>;

    /// Remove a post. A missing id reports [`StoreError::NotFound`].
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Release the backend handle. Called once on shutdown.
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
