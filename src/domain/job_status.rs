use std::fmt;

/// Status of an asynchronous transcription job as reported by the runner.
///
/// Both terminal variants carry their payload so callers have to handle each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionJobStatus {
    InProgress,
    Completed { transcript_uri: Option<String> },
    Failed { reason: String },
}

impl TranscriptionJobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionJobStatus::InProgress => "IN_PROGRESS",
            TranscriptionJobStatus::Completed { .. } => "COMPLETED",
            TranscriptionJobStatus::Failed { .. } => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TranscriptionJobStatus::InProgress)
    }
}

impl fmt::Display for TranscriptionJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
