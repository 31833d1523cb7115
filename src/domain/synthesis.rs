use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisEngine {
    Standard,
    #[default]
    Neural,
}

impl SynthesisEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            SynthesisEngine::Standard => "standard",
            SynthesisEngine::Neural => "neural",
        }
    }
}

impl fmt::Display for SynthesisEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One text-to-speech job. The provider writes the audio under
/// `output_bucket/output_prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub locale: String,
    pub voice: String,
    pub engine: SynthesisEngine,
    pub output_bucket: String,
    pub output_prefix: String,
}

/// Submission receipt. `output_uri` is where the provider writes the audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisTask {
    pub task_id: Option<String>,
    pub output_uri: String,
}
