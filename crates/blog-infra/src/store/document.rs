//! MongoDB post store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};

use blog_core::domain::now;
use blog_core::{CreateFields, Post, PostStore, StoreError, UpdateFields};

use super::config::DocumentStoreConfig;
use super::entity::{PostDocument, parse_id, update_document};

/// Post store backed by a MongoDB collection.
///
/// Identity comes from the database (`ObjectId`); consistency and durability
/// are whatever the server provides per document.
pub struct MongoPostStore {
    client: Client,
    collection: Collection<PostDocument>,
}

impl MongoPostStore {
    /// Connect and verify the server answers before handing out the store.
    pub async fn connect(config: &DocumentStoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.url).await.map_err(backend)?;
        options.app_name = Some("blog-party".to_string());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options).map_err(backend)?;
        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(backend)?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB post store"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
            client,
        })
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn create(&self, fields: CreateFields) -> Result<Post, StoreError> {
        let mut document = PostDocument::new(fields.resolve(), now());
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(backend)?;

        document.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Unavailable("insert did not return an ObjectId".to_string())
        })?);
        document.into_post()
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let documents: Vec<PostDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(backend)?
            .try_collect()
            .await
            .map_err(backend)?;

        documents.into_iter().map(PostDocument::into_post).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Post, StoreError> {
        let oid = parse_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(backend)?
            .ok_or_else(|| StoreError::not_found(id))?
            .into_post()
    }

    async fn update_by_id(&self, id: &str, fields: UpdateFields) -> Result<Post, StoreError> {
        let oid = parse_id(id)?;
        self.collection
            .find_one_and_update(doc! { "_id": oid }, update_document(fields, now()))
            .return_document(ReturnDocument::After)
            .await
            .map_err(backend)?
            .ok_or_else(|| StoreError::not_found(id))?
            .into_post()
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let oid = parse_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(backend)?;

        if result.deleted_count == 0 {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB post store closed");
        Ok(())
    }
}
