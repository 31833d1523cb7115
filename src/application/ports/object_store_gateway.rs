use std::time::Duration;

use bytes::Bytes;

use crate::domain::{ObjectKey, StoredObjectLocation};

/// Bucket-bound access to the object store shared by every pipeline stage.
#[async_trait::async_trait]
pub trait ObjectStoreGateway: Send + Sync {
    fn bucket(&self) -> &str;

    /// URI under which external job runners can read the object.
    fn object_uri(&self, key: &ObjectKey) -> String;

    async fn put(
        &self,
        key: &ObjectKey,
        body: Bytes,
        metadata: &ObjectMetadata,
    ) -> Result<(), ObjectStoreError>;

    async fn fetch(&self, key: &ObjectKey) -> Result<Bytes, ObjectStoreError>;

    async fn signed_url(
        &self,
        location: &StoredObjectLocation,
        ttl: Duration,
    ) -> Result<String, ObjectStoreError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub content_type: Option<String>,
    pub user_metadata: Vec<(String, String)>,
}

impl ObjectMetadata {
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_metadata.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content_type.is_none() && self.user_metadata.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("url signing failed: {0}")]
    SigningFailed(String),
    #[error("object lives in bucket {actual}, gateway is bound to {expected}")]
    ForeignBucket { expected: String, actual: String },
    #[error("store configuration: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
