use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::application::ports::{
    ObjectMetadata, ObjectStoreGateway, SpeechSynthesizer, SynthesisError,
};
use crate::domain::{ObjectKey, SynthesisRequest, SynthesisTask};

const MOCK_AUDIO: &[u8] = b"ID3mock-audio";

/// Answers with a Polly-shaped output URI
/// (`https://s3.us-east-1.amazonaws.com/{bucket}/{prefix}.{task_id}.mp3`).
#[derive(Default)]
pub struct MockSynthesizer {
    store: Option<Arc<dyn ObjectStoreGateway>>,
    output_uri: Option<String>,
    fail_with: Option<String>,
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also writes placeholder audio at the reported key.
    pub fn writing_to(store: Arc<dyn ObjectStoreGateway>) -> Self {
        Self {
            store: Some(store),
            ..Self::default()
        }
    }

    /// Reports a fixed output URI regardless of the request.
    pub fn with_output_uri(uri: impl Into<String>) -> Self {
        Self {
            output_uri: Some(uri.into()),
            ..Self::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn submit(&self, request: &SynthesisRequest) -> Result<SynthesisTask, SynthesisError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(message) = &self.fail_with {
            return Err(SynthesisError::SubmitFailed(message.clone()));
        }

        let task_id = Uuid::new_v4().to_string();

        if let Some(uri) = &self.output_uri {
            return Ok(SynthesisTask {
                task_id: Some(task_id),
                output_uri: uri.clone(),
            });
        }

        let key = format!("{}.{}.mp3", request.output_prefix, task_id);

        if let Some(store) = &self.store {
            store
                .put(
                    &ObjectKey::from_raw(key.clone()),
                    Bytes::from_static(MOCK_AUDIO),
                    &ObjectMetadata::default().with_content_type("audio/mpeg"),
                )
                .await
                .map_err(|e| SynthesisError::SubmitFailed(e.to_string()))?;
        }

        Ok(SynthesisTask {
            output_uri: format!(
                "https://s3.us-east-1.amazonaws.com/{}/{}",
                request.output_bucket, key
            ),
            task_id: Some(task_id),
        })
    }
}
