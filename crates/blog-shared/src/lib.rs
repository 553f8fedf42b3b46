//! # Blog Shared
//!
//! Wire types shared by the HTML routes and the JSON API.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
