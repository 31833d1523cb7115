use async_trait::async_trait;

use crate::domain::{SynthesisRequest, SynthesisTask};

/// Text-to-speech service that writes its audio straight into the object store.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn submit(&self, request: &SynthesisRequest) -> Result<SynthesisTask, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis submission failed: {0}")]
    SubmitFailed(String),
    #[error("synthesis response carried no output uri")]
    MissingOutputUri,
}
