use std::fmt;
use std::time::Duration;

use crate::application::ports::{
    ObjectStoreError, SynthesisError, TranscriptionJobError, TranslationError,
};
use crate::domain::LocationParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    Transcription,
    Translation,
    Synthesis,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Upload => "upload",
            Stage::Transcription => "transcription",
            Stage::Translation => "translation",
            Stage::Synthesis => "synthesis",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by an external collaborator, kept intact for logging.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("object store: {0}")]
    Store(#[from] ObjectStoreError),
    #[error("transcription runner: {0}")]
    Transcription(#[from] TranscriptionJobError),
    #[error("translator: {0}")]
    Translation(#[from] TranslationError),
    #[error("synthesizer: {0}")]
    Synthesis(#[from] SynthesisError),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no file provided")]
    NoFileProvided,
    #[error("uploaded file is empty")]
    EmptyFile,
    #[error("transcription job {job_name} failed: {reason}")]
    TranscriptionFailed { job_name: String, reason: String },
    #[error("transcription job {job_name} still running after {waited:?}")]
    TranscriptionTimedOut { job_name: String, waited: Duration },
    #[error("transcript {key} could not be parsed: {reason}")]
    TranscriptParseError { key: String, reason: String },
    #[error("synthesis output uri {uri} is malformed: {source}")]
    SynthesisUriMalformed {
        uri: String,
        #[source]
        source: LocationParseError,
    },
    #[error("{stage} stage: {source}")]
    UpstreamServiceError {
        stage: Stage,
        #[source]
        source: UpstreamError,
    },
}

impl PipelineError {
    pub(crate) fn upstream(stage: Stage, source: impl Into<UpstreamError>) -> Self {
        PipelineError::UpstreamServiceError {
            stage,
            source: source.into(),
        }
    }

    /// Stable tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::NoFileProvided => "no_file_provided",
            PipelineError::EmptyFile => "empty_file",
            PipelineError::TranscriptionFailed { .. } => "transcription_failed",
            PipelineError::TranscriptionTimedOut { .. } => "transcription_timed_out",
            PipelineError::TranscriptParseError { .. } => "transcript_parse_error",
            PipelineError::SynthesisUriMalformed { .. } => "synthesis_uri_malformed",
            PipelineError::UpstreamServiceError { .. } => "upstream_service_error",
        }
    }

    /// True for failures caused by the request itself rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::NoFileProvided | PipelineError::EmptyFile)
    }
}
