//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate contains the post entity and the storage port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{CreateFields, Post, UpdateFields};
pub use error::StoreError;
pub use ports::PostStore;
