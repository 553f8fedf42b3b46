//! Post store backends and construction-time selection.

mod config;
mod file;

#[cfg(feature = "document")]
mod document;
#[cfg(feature = "document")]
pub mod entity;

pub use config::{
    ConfigError, DEFAULT_COLLECTION, DEFAULT_DATA_PATH, DEFAULT_DATABASE_NAME,
    DEFAULT_DATABASE_URL, DocumentStoreConfig, FileStoreConfig, StoreConfig, open_store,
};
pub use file::JsonFilePostStore;

#[cfg(feature = "document")]
pub use document::MongoPostStore;
