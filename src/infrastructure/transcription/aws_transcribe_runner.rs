use async_trait::async_trait;
use aws_sdk_transcribe::types::{
    LanguageCode, Media, MediaFormat as AwsMediaFormat,
    TranscriptionJobStatus as AwsJobStatus,
};

use crate::application::ports::{TranscriptionJobError, TranscriptionJobRunner};
use crate::domain::{TranscriptionJob, TranscriptionJobStatus};

/// Amazon Transcribe batch jobs. Output JSON is written to `output_bucket`.
pub struct AwsTranscribeRunner {
    client: aws_sdk_transcribe::Client,
    output_bucket: String,
}

impl AwsTranscribeRunner {
    pub fn new(config: &aws_config::SdkConfig, output_bucket: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_transcribe::Client::new(config),
            output_bucket: output_bucket.into(),
        }
    }
}

#[async_trait]
impl TranscriptionJobRunner for AwsTranscribeRunner {
    async fn submit(&self, job: &TranscriptionJob) -> Result<(), TranscriptionJobError> {
        tracing::debug!(
            job_name = %job.job_name,
            source_uri = %job.source_uri,
            locale = %job.locale,
            "Starting Amazon Transcribe job"
        );

        self.client
            .start_transcription_job()
            .transcription_job_name(&job.job_name)
            .language_code(LanguageCode::from(job.locale.as_str()))
            .media_format(AwsMediaFormat::from(job.media_format.as_str()))
            .media(Media::builder().media_file_uri(&job.source_uri).build())
            .output_bucket_name(&self.output_bucket)
            .output_key(job.output_key.as_str())
            .send()
            .await
            .map_err(|e| TranscriptionJobError::SubmitFailed(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn status(&self, job_name: &str) -> Result<TranscriptionJobStatus, TranscriptionJobError> {
        let response = self
            .client
            .get_transcription_job()
            .transcription_job_name(job_name)
            .send()
            .await
            .map_err(|e| TranscriptionJobError::StatusFailed(e.into_service_error().to_string()))?;

        let job = response
            .transcription_job()
            .ok_or_else(|| TranscriptionJobError::JobNotFound(job_name.to_string()))?;

        let status = match job.transcription_job_status() {
            Some(AwsJobStatus::Completed) => TranscriptionJobStatus::Completed {
                transcript_uri: job
                    .transcript()
                    .and_then(|t| t.transcript_file_uri())
                    .map(str::to_string),
            },
            Some(AwsJobStatus::Failed) => TranscriptionJobStatus::Failed {
                reason: job.failure_reason().unwrap_or("unknown").to_string(),
            },
            Some(AwsJobStatus::InProgress) | Some(AwsJobStatus::Queued) | None => {
                TranscriptionJobStatus::InProgress
            }
            Some(other) => {
                tracing::warn!(job_name, status = other.as_str(), "Unrecognized job status, treating as in progress");
                TranscriptionJobStatus::InProgress
            }
        };

        Ok(status)
    }
}
