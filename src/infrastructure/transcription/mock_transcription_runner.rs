use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{
    ObjectMetadata, ObjectStoreGateway, TranscriptionJobError, TranscriptionJobRunner,
};
use crate::domain::{TranscriptDocument, TranscriptionJob, TranscriptionJobStatus};

/// Scripted runner. Statuses are replayed in order and the last one repeats
/// once the script is exhausted.
///
/// When built with [`MockTranscriptionJobRunner::completing_with`], `submit`
/// also writes a transcript document to the job's output key, the way the real
/// service does.
pub struct MockTranscriptionJobRunner {
    statuses: Mutex<VecDeque<TranscriptionJobStatus>>,
    last_status: Mutex<TranscriptionJobStatus>,
    output: Option<(Arc<dyn ObjectStoreGateway>, String)>,
    submitted: Mutex<Vec<TranscriptionJob>>,
    status_calls: AtomicU32,
}

impl MockTranscriptionJobRunner {
    pub fn scripted(statuses: Vec<TranscriptionJobStatus>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            last_status: Mutex::new(TranscriptionJobStatus::InProgress),
            output: None,
            submitted: Mutex::new(Vec::new()),
            status_calls: AtomicU32::new(0),
        }
    }

    pub fn completing_with(transcript: impl Into<String>, store: Arc<dyn ObjectStoreGateway>) -> Self {
        let mut runner = Self::scripted(vec![TranscriptionJobStatus::Completed {
            transcript_uri: None,
        }]);
        runner.output = Some((store, transcript.into()));
        runner
    }

    /// Replaces the status script, keeping any configured transcript output.
    pub fn with_statuses(mut self, statuses: Vec<TranscriptionJobStatus>) -> Self {
        if let Ok(script) = self.statuses.get_mut() {
            *script = statuses.into();
        }
        self
    }

    pub fn status_calls(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn submitted_jobs(&self) -> Vec<TranscriptionJob> {
        self.submitted
            .lock()
            .map(|jobs| jobs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranscriptionJobRunner for MockTranscriptionJobRunner {
    async fn submit(&self, job: &TranscriptionJob) -> Result<(), TranscriptionJobError> {
        if let Some((store, transcript)) = &self.output {
            let document = TranscriptDocument::single(Some(job.job_name.clone()), transcript.clone());
            let body = serde_json::to_vec(&document)
                .map_err(|e| TranscriptionJobError::SubmitFailed(e.to_string()))?;
            store
                .put(
                    &job.output_key,
                    Bytes::from(body),
                    &ObjectMetadata::default().with_content_type("application/json"),
                )
                .await
                .map_err(|e| TranscriptionJobError::SubmitFailed(e.to_string()))?;
        }

        self.submitted
            .lock()
            .map_err(|e| TranscriptionJobError::SubmitFailed(e.to_string()))?
            .push(job.clone());
        Ok(())
    }

    async fn status(&self, job_name: &str) -> Result<TranscriptionJobStatus, TranscriptionJobError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);

        let next = self
            .statuses
            .lock()
            .map_err(|e| TranscriptionJobError::StatusFailed(e.to_string()))?
            .pop_front();
        let mut last = self
            .last_status
            .lock()
            .map_err(|e| TranscriptionJobError::StatusFailed(e.to_string()))?;
        if let Some(status) = next {
            *last = status;
        }

        tracing::debug!(job_name, status = %*last, "Mock transcription status");
        Ok(last.clone())
    }
}
