//! # Blog Infrastructure
//!
//! Concrete implementations of the [`blog_core::PostStore`] port.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - JSON file store only, no database driver
//! - `document` - MongoDB document store

pub mod store;

pub use store::{JsonFilePostStore, StoreConfig, open_store};

#[cfg(feature = "document")]
pub use store::MongoPostStore;
