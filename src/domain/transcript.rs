use serde::{Deserialize, Serialize};

use super::ObjectKey;

/// Text extracted from a completed transcription job's output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub object_key: ObjectKey,
    pub text: String,
}

impl Transcript {
    /// Parses the job output document and takes the first transcript.
    ///
    /// Expected shape:
    /// ```json
    /// { "results": { "transcripts": [{ "transcript": "the text..." }] } }
    /// ```
    pub fn from_job_output(object_key: ObjectKey, raw: &str) -> Result<Self, TranscriptParseError> {
        let document: TranscriptDocument = serde_json::from_str(raw)
            .map_err(|e| TranscriptParseError::InvalidDocument(e.to_string()))?;

        let text = document
            .results
            .transcripts
            .into_iter()
            .next()
            .map(|entry| entry.transcript)
            .ok_or(TranscriptParseError::NoTranscripts)?;

        if text.trim().is_empty() {
            return Err(TranscriptParseError::EmptyTranscript);
        }

        Ok(Self { object_key, text })
    }
}

/// Output document written by the speech-to-text provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    #[serde(rename = "jobName", default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    pub results: TranscriptResults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResults {
    pub transcripts: Vec<TranscriptEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub transcript: String,
}

impl TranscriptDocument {
    pub fn single(job_name: Option<String>, text: impl Into<String>) -> Self {
        Self {
            job_name,
            results: TranscriptResults {
                transcripts: vec![TranscriptEntry {
                    transcript: text.into(),
                }],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptParseError {
    #[error("transcript is not valid utf-8")]
    InvalidEncoding,
    #[error("invalid transcript document: {0}")]
    InvalidDocument(String),
    #[error("transcript document has no transcripts")]
    NoTranscripts,
    #[error("transcript is empty")]
    EmptyTranscript,
}
