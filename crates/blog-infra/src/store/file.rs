//! JSON file post store.
//!
//! The whole collection lives in one JSON array. Every operation reads and
//! parses the full file; mutations write a complete snapshot to a sibling
//! temp file and rename it over the original. Readers never see a half-written
//! collection, but there is no locking: concurrent writers race and the last
//! rename wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use blog_core::{CreateFields, Post, PostStore, StoreError, UpdateFields};

/// Post store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePostStore {
    path: PathBuf,
}

impl JsonFilePostStore {
    /// Open a store at `path`, creating parent directories if needed.
    ///
    /// The file itself is created lazily on the first write; a missing file
    /// reads as an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.path, e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Unavailable(format!(
                "malformed collection in {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(posts)
            .map_err(|e| StoreError::Unavailable(format!("failed to serialize posts: {e}")))?;

        // Unique temp name so two writers never share a half-written file.
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| io_error(&tmp, e))?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(io_error(&self.path, e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("posts.json");
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}

fn io_error(path: &Path, err: std::io::Error) -> StoreError {
    StoreError::Unavailable(format!("{}: {}", path.display(), err))
}

fn fresh_id(posts: &[Post]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if posts.iter().all(|p| p.id != id) {
            return id;
        }
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn create(&self, fields: CreateFields) -> Result<Post, StoreError> {
        let mut posts = self.load().await?;
        let post = Post::new(fresh_id(&posts), fields);
        posts.push(post.clone());
        self.persist(&posts).await?;
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        self.load().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Post, StoreError> {
        self.load()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn update_by_id(&self, id: &str, fields: UpdateFields) -> Result<Post, StoreError> {
        let mut posts = self.load().await?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        post.apply(fields);
        let updated = post.clone();

        self.persist(&posts).await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.load().await?;
        let idx = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        posts.remove(idx);
        self.persist(&posts).await
    }
}
