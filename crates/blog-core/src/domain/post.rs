use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTHOR: &str = "anon";
pub const DEFAULT_TITLE: &str = "blog title";
pub const DEFAULT_BODY: &str = "blog body";

/// Post entity - represents one blog post.
///
/// Serialized with camelCase keys; this is the canonical on-disk record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Build a post from resolved fields with the given store-assigned id.
    pub fn new(id: impl Into<String>, fields: CreateFields) -> Self {
        let now = now();
        let ResolvedFields {
            author,
            title,
            body,
            tags,
        } = fields.resolve();

        Self {
            id: id.into(),
            author,
            title,
            body,
            created_at: now,
            updated_at: now,
            tags,
        }
    }

    /// Apply the supplied fields and bump `updated_at`.
    pub fn apply(&mut self, fields: UpdateFields) {
        if let Some(author) = fields.author {
            self.author = author;
        }
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(body) = fields.body {
            self.body = body;
        }
        self.touch();
    }

    /// Set `updated_at` to now, never moving it backwards.
    pub fn touch(&mut self) {
        self.updated_at = now().max(self.updated_at);
    }
}

/// Current time at millisecond precision, the resolution every backend keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Caller-supplied content for a new post. Absent fields get defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFields {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// [`CreateFields`] with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    pub author: String,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl CreateFields {
    pub fn resolve(self) -> ResolvedFields {
        ResolvedFields {
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            body: self.body.unwrap_or_else(|| DEFAULT_BODY.to_string()),
            tags: self.tags.unwrap_or_default(),
        }
    }
}

/// Partial update. `None` leaves the stored value untouched; tags are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFields {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl UpdateFields {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.body.is_none()
    }
}
