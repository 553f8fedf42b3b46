//! Middleware modules.

pub mod error;
mod method_override;

pub use method_override::MethodOverride;
