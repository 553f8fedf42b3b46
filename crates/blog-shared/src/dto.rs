//! Data Transfer Objects - request/response types for the HTML forms and the JSON API.
//!
//! Browsers submit empty inputs as `""`; every conversion here treats blank
//! text as "not supplied" so store defaults apply.

use serde::{Deserialize, Serialize};

use blog_core::{CreateFields, Post, UpdateFields};

/// Body of the "new post" HTML form (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPostForm {
    pub author: Option<String>,
    pub title: Option<String>,
    pub blog_body: Option<String>,
    /// Comma separated.
    pub tags: Option<String>,
}

impl From<NewPostForm> for CreateFields {
    fn from(form: NewPostForm) -> Self {
        Self {
            author: non_blank(form.author),
            title: non_blank(form.title),
            body: non_blank(form.blog_body),
            tags: form.tags.map(|raw| split_tags(&raw)),
        }
    }
}

/// Body of the "edit post" HTML form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditPostForm {
    pub author: Option<String>,
    pub title: Option<String>,
    pub blog_body: Option<String>,
}

impl From<EditPostForm> for UpdateFields {
    fn from(form: EditPostForm) -> Self {
        Self {
            author: non_blank(form.author),
            title: non_blank(form.title),
            body: non_blank(form.blog_body),
        }
    }
}

/// Request to create a post through the JSON API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreatePostRequest> for CreateFields {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            author: non_blank(req.author),
            title: non_blank(req.title),
            body: non_blank(req.body),
            tags: Some(req.tags),
        }
    }
}

/// Response containing a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author,
            title: post.title,
            body: post.body,
            tags: post.tags,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
