use chrono::Utc;
use uuid::Uuid;

use super::{MediaFormat, ObjectKey};

/// Submission parameters of one speech-to-text job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionJob {
    pub job_name: String,
    pub source_uri: String,
    pub locale: String,
    pub media_format: MediaFormat,
    pub output_key: ObjectKey,
}

impl TranscriptionJob {
    pub fn new(
        source_uri: String,
        locale: impl Into<String>,
        media_format: MediaFormat,
        output_key: ObjectKey,
    ) -> Self {
        Self {
            job_name: Self::generate_name(),
            source_uri,
            locale: locale.into(),
            media_format,
            output_key,
        }
    }

    /// `transcription-<unix millis>-<8 hex chars>`; the random suffix keeps
    /// names distinct for uploads submitted within the same millisecond.
    pub fn generate_name() -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!(
            "transcription-{}-{}",
            Utc::now().timestamp_millis(),
            &suffix[..8]
        )
    }
}
