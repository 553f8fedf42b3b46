//! Post document for MongoDB.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};

use blog_core::domain::ResolvedFields;
use blog_core::{Post, StoreError, UpdateFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostDocument {
    /// A document ready for insertion; the database assigns `_id`.
    pub fn new(fields: ResolvedFields, now: DateTime<Utc>) -> Self {
        let now = to_bson(now);
        Self {
            id: None,
            author: fields.author,
            title: fields.title,
            body: fields.body,
            created_at: now,
            updated_at: now,
            tags: fields.tags,
        }
    }

    /// Conversion from stored document to domain Post.
    pub fn into_post(self) -> Result<Post, StoreError> {
        let id = self
            .id
            .ok_or_else(|| StoreError::Unavailable("document without _id".to_string()))?;

        Ok(Post {
            id: id.to_hex(),
            author: self.author,
            title: self.title,
            body: self.body,
            created_at: from_bson(self.created_at)?,
            updated_at: from_bson(self.updated_at)?,
            tags: self.tags,
        })
    }
}

/// Update operators for a partial update.
///
/// `updatedAt` goes through `$max` so a lagging clock can never move it
/// before the stored value.
pub fn update_document(fields: UpdateFields, now: DateTime<Utc>) -> Document {
    let mut set = Document::new();
    if let Some(author) = fields.author {
        set.insert("author", author);
    }
    if let Some(title) = fields.title {
        set.insert("title", title);
    }
    if let Some(body) = fields.body {
        set.insert("body", body);
    }

    let mut update = doc! { "$max": { "updatedAt": to_bson(now) } };
    if !set.is_empty() {
        update.insert("$set", set);
    }
    update
}

/// Parse a public id into an ObjectId filter value.
pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))
}

fn to_bson(ts: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(ts.timestamp_millis())
}

fn from_bson(ts: bson::DateTime) -> Result<DateTime<Utc>, StoreError> {
    DateTime::<Utc>::from_timestamp_millis(ts.timestamp_millis())
        .ok_or_else(|| StoreError::Unavailable(format!("timestamp out of range: {ts}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::CreateFields;
    use blog_core::domain::now;

    #[test]
    fn new_document_has_no_id_and_equal_timestamps() {
        let document = PostDocument::new(CreateFields::default().resolve(), now());
        assert!(document.id.is_none());
        assert_eq!(document.created_at, document.updated_at);
        assert_eq!(document.author, "anon");

        let raw = bson::to_document(&document).unwrap();
        assert!(!raw.contains_key("_id"));
        assert!(raw.contains_key("createdAt"));
    }

    #[test]
    fn into_post_uses_hex_id_and_keeps_millis() {
        let ts = now();
        let oid = ObjectId::new();
        let mut document = PostDocument::new(
            CreateFields {
                title: Some("Hi".into()),
                tags: Some(vec!["a".into(), "b".into()]),
                ..CreateFields::default()
            }
            .resolve(),
            ts,
        );
        document.id = Some(oid);

        let post = document.into_post().unwrap();
        assert_eq!(post.id, oid.to_hex());
        assert_eq!(post.title, "Hi");
        assert_eq!(post.created_at, ts);
        assert_eq!(post.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn into_post_without_id_is_unavailable() {
        let document = PostDocument::new(CreateFields::default().resolve(), now());
        assert!(matches!(
            document.into_post(),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[test]
    fn update_document_sets_only_supplied_fields() {
        let update = update_document(UpdateFields::title("X"), now());
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("title").unwrap(), "X");
        assert!(!set.contains_key("author"));
        assert!(!set.contains_key("body"));
        assert!(update.get_document("$max").unwrap().contains_key("updatedAt"));
    }

    #[test]
    fn empty_update_omits_set() {
        let update = update_document(UpdateFields::default(), now());
        assert!(!update.contains_key("$set"));
        assert!(update.contains_key("$max"));
    }

    #[test]
    fn malformed_id_is_not_not_found() {
        assert_eq!(parse_id("nope"), Err(StoreError::invalid_id("nope")));
        let oid = ObjectId::new();
        assert_eq!(parse_id(&oid.to_hex()), Ok(oid));
    }
}
