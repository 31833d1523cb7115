use async_trait::async_trait;
use aws_sdk_polly::types::{Engine, LanguageCode, OutputFormat, VoiceId};

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::{SynthesisRequest, SynthesisTask};
use crate::infrastructure::observability::sanitize_text;

/// Amazon Polly asynchronous synthesis tasks. Polly writes the mp3 straight
/// into the requested bucket.
pub struct AwsPollySynthesizer {
    client: aws_sdk_polly::Client,
}

impl AwsPollySynthesizer {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_polly::Client::new(config),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for AwsPollySynthesizer {
    async fn submit(&self, request: &SynthesisRequest) -> Result<SynthesisTask, SynthesisError> {
        tracing::debug!(
            voice = %request.voice,
            locale = %request.locale,
            engine = %request.engine,
            text = %sanitize_text(&request.text),
            "Starting Polly synthesis task"
        );

        let output = self
            .client
            .start_speech_synthesis_task()
            .engine(Engine::from(request.engine.as_str()))
            .language_code(LanguageCode::from(request.locale.as_str()))
            .output_format(OutputFormat::Mp3)
            .output_s3_bucket_name(&request.output_bucket)
            .output_s3_key_prefix(&request.output_prefix)
            .text(&request.text)
            .voice_id(VoiceId::from(request.voice.as_str()))
            .send()
            .await
            .map_err(|e| SynthesisError::SubmitFailed(e.into_service_error().to_string()))?;

        let task = output
            .synthesis_task()
            .ok_or(SynthesisError::MissingOutputUri)?;
        let output_uri = task
            .output_uri()
            .filter(|uri| !uri.is_empty())
            .ok_or(SynthesisError::MissingOutputUri)?;

        Ok(SynthesisTask {
            task_id: task.task_id().map(str::to_string),
            output_uri: output_uri.to_string(),
        })
    }
}
