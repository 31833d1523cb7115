use std::time::Duration;

use bytes::Bytes;

use crate::domain::ObjectKey;

/// File part of the inbound form.
#[derive(Debug, Clone)]
pub struct AudioAttachment {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Everything the caller submits for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub file: Option<AudioAttachment>,
    pub input_language: String,
    pub output_language: String,
}

/// Output of the upload stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAudio {
    pub object_key: ObjectKey,
    pub source_locale: String,
    pub target_locale: String,
    pub content_length: u64,
}

/// Output of the transcription stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribedAudio {
    pub transcript_key: ObjectKey,
    pub job_name: String,
    pub source_locale: String,
    pub target_locale: String,
}

/// Output of the translation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub source_text: String,
    pub translated_text: String,
    pub source_locale: String,
    pub target_locale: String,
    pub object_key: ObjectKey,
}

/// Terminal artifact handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub download_url: String,
    pub expires_in: Duration,
    pub audio_key: ObjectKey,
}
