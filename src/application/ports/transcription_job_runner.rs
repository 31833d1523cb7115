use async_trait::async_trait;

use crate::domain::{TranscriptionJob, TranscriptionJobStatus};

/// Asynchronous speech-to-text service. Jobs are submitted once and polled.
#[async_trait]
pub trait TranscriptionJobRunner: Send + Sync {
    async fn submit(&self, job: &TranscriptionJob) -> Result<(), TranscriptionJobError>;

    async fn status(&self, job_name: &str) -> Result<TranscriptionJobStatus, TranscriptionJobError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionJobError {
    #[error("job submission failed: {0}")]
    SubmitFailed(String),
    #[error("status request failed: {0}")]
    StatusFailed(String),
    #[error("job not found: {0}")]
    JobNotFound(String),
}
