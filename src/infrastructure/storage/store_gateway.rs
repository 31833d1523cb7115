use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use chrono::Utc;
use futures::StreamExt;
use http::Method;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::signer::Signer;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::{ObjectMetadata, ObjectStoreError, ObjectStoreGateway};
use crate::domain::{ObjectKey, StoredObjectLocation};

/// [`ObjectStoreGateway`] over any `object_store` backend, bound to one bucket.
///
/// Backends that can presign (S3) produce real signed URLs. The others
/// produce `<public_base_url>/<key>?expires=<unix seconds>`.
pub struct StoreGateway {
    inner: Arc<dyn ObjectStore>,
    signer: Option<Arc<dyn Signer>>,
    bucket: String,
    public_base_url: String,
    supports_attributes: bool,
}

impl StoreGateway {
    /// Credentials come from the standard `AWS_*` environment variables.
    pub fn s3(bucket: &str, region: &str) -> Result<Self, ObjectStoreError> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .with_region(region)
            .build()
            .map_err(|e| ObjectStoreError::Configuration(e.to_string()))?;
        let store = Arc::new(store);

        Ok(Self {
            inner: store.clone(),
            signer: Some(store),
            bucket: bucket.to_string(),
            public_base_url: format!("https://{}.s3.amazonaws.com", bucket),
            supports_attributes: true,
        })
    }

    pub fn local(
        base_path: PathBuf,
        bucket: &str,
        public_base_url: Option<String>,
    ) -> Result<Self, ObjectStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let public_base_url =
            public_base_url.unwrap_or_else(|| format!("file://{}", base_path.display()));
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ObjectStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(fs),
            signer: None,
            bucket: bucket.to_string(),
            public_base_url,
            supports_attributes: false,
        })
    }

    pub fn in_memory(bucket: &str) -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
            signer: None,
            bucket: bucket.to_string(),
            public_base_url: format!("memory://{}", bucket),
            supports_attributes: true,
        }
    }

    fn attributes(&self, metadata: &ObjectMetadata) -> Attributes {
        let mut attributes = Attributes::new();
        if !self.supports_attributes {
            if !metadata.is_empty() {
                tracing::debug!("Store backend has no object attributes; metadata dropped");
            }
            return attributes;
        }

        if let Some(content_type) = &metadata.content_type {
            attributes.insert(Attribute::ContentType, content_type.clone().into());
        }
        for (name, value) in &metadata.user_metadata {
            attributes.insert(Attribute::Metadata(name.clone().into()), value.clone().into());
        }
        attributes
    }
}

#[async_trait::async_trait]
impl ObjectStoreGateway for StoreGateway {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn object_uri(&self, key: &ObjectKey) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }

    async fn put(
        &self,
        key: &ObjectKey,
        body: Bytes,
        metadata: &ObjectMetadata,
    ) -> Result<(), ObjectStoreError> {
        let store_path = StorePath::from(key.as_str());
        let opts = PutOptions {
            attributes: self.attributes(metadata),
            ..Default::default()
        };

        self.inner
            .put_opts(&store_path, PutPayload::from(body), opts)
            .await
            .map_err(|e| ObjectStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(key = %key, bucket = %self.bucket, "Object stored");
        Ok(())
    }

    async fn fetch(&self, key: &ObjectKey) -> Result<Bytes, ObjectStoreError> {
        let store_path = StorePath::from(key.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => ObjectStoreError::NotFound(key.to_string()),
            other => ObjectStoreError::DownloadFailed(other.to_string()),
        })?;

        let mut stream = result.into_stream();
        let mut buffer = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ObjectStoreError::DownloadFailed(e.to_string()))?;
            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer.freeze())
    }

    async fn signed_url(
        &self,
        location: &StoredObjectLocation,
        ttl: Duration,
    ) -> Result<String, ObjectStoreError> {
        if location.bucket != self.bucket {
            return Err(ObjectStoreError::ForeignBucket {
                expected: self.bucket.clone(),
                actual: location.bucket.clone(),
            });
        }

        match &self.signer {
            Some(signer) => {
                let store_path = StorePath::from(location.key.as_str());
                signer
                    .signed_url(Method::GET, &store_path, ttl)
                    .await
                    .map(|url| url.to_string())
                    .map_err(|e| ObjectStoreError::SigningFailed(e.to_string()))
            }
            None => {
                let expires_at = Utc::now().timestamp() + ttl.as_secs() as i64;
                Ok(format!(
                    "{}?expires={}",
                    self.object_uri(&location.key),
                    expires_at
                ))
            }
        }
    }
}
