use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ObjectStoreError, ObjectStoreGateway};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::store_gateway::StoreGateway;

pub struct StoreFactory;

impl StoreFactory {
    pub fn create(
        settings: &StorageSettings,
        region: &str,
    ) -> Result<Arc<dyn ObjectStoreGateway>, ObjectStoreError> {
        if settings.bucket.trim().is_empty() {
            return Err(ObjectStoreError::Configuration(
                "storage.bucket required".into(),
            ));
        }

        match settings.provider {
            StorageProviderSetting::S3 => {
                let store = StoreGateway::s3(&settings.bucket, region)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let store =
                    StoreGateway::local(path, &settings.bucket, settings.public_base_url.clone())?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(StoreGateway::in_memory(&settings.bucket))),
        }
    }
}
