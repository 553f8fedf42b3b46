//! Domain-level error types.

use thiserror::Error;

/// Storage errors - the typed outcomes a [`crate::PostStore`] can report.
///
/// A malformed identifier is kept apart from a well-formed one that matches
/// nothing, so callers can tell "bad link" from "deleted post".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error("Malformed post id: {id}")]
    InvalidId { id: String },

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// True for lookups that matched nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
