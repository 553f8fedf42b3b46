//! Domain entities - the core business objects.

mod post;

pub use post::{
    CreateFields, DEFAULT_AUTHOR, DEFAULT_BODY, DEFAULT_TITLE, Post, ResolvedFields,
    UpdateFields, now,
};
