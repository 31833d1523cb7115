use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use uuid::Uuid;

use crate::application::ports::{
    ObjectMetadata, ObjectStoreGateway, SpeechSynthesizer, TextTranslator, TranscriptionJobRunner,
};
use crate::domain::language::is_supported_language;
use crate::domain::{
    FINAL_AUDIO_FOLDER, MediaFormat, ObjectKey, StoredObjectLocation, SynthesisEngine,
    SynthesisRequest, Transcript, TranscriptParseError, TranscriptionJob, resolve_locale,
    resolve_voice,
};

use super::job_poller::{JobPoller, PollError, PollPolicy};
use super::pipeline_error::{PipelineError, Stage};
use super::pipeline_types::{
    PipelineResult, TranscribedAudio, Translation, UploadRequest, UploadedAudio,
};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub poll_policy: PollPolicy,
    pub signed_url_ttl: Duration,
    pub default_media_format: MediaFormat,
    pub synthesis_engine: SynthesisEngine,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            poll_policy: PollPolicy::default(),
            signed_url_ttl: Duration::from_secs(3600),
            default_media_format: MediaFormat::Webm,
            synthesis_engine: SynthesisEngine::Neural,
        }
    }
}

/// Runs upload, transcription, translation and synthesis strictly in order.
///
/// Each stage takes the previous stage's typed output as its whole input.
/// Objects written by earlier stages are left in place when a later stage
/// fails.
pub struct PipelineService {
    store: Arc<dyn ObjectStoreGateway>,
    transcriber: Arc<dyn TranscriptionJobRunner>,
    translator: Arc<dyn TextTranslator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    config: PipelineConfig,
}

impl PipelineService {
    pub fn new(
        store: Arc<dyn ObjectStoreGateway>,
        transcriber: Arc<dyn TranscriptionJobRunner>,
        translator: Arc<dyn TextTranslator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            transcriber,
            translator,
            synthesizer,
            config,
        }
    }

    #[tracing::instrument(
        name = "pipeline_run",
        skip_all,
        fields(run_id = %Uuid::new_v4(), object_key = tracing::field::Empty)
    )]
    pub async fn run(&self, request: UploadRequest) -> Result<PipelineResult, PipelineError> {
        let uploaded = self.upload(request).await?;
        tracing::Span::current().record("object_key", uploaded.object_key.as_str());

        let transcribed = self.transcribe(&uploaded).await?;
        let translation = self.translate(&transcribed).await?;
        let result = self.synthesize(&translation).await?;

        tracing::info!(audio_key = %result.audio_key, "Pipeline run completed");
        Ok(result)
    }

    #[tracing::instrument(skip_all)]
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadedAudio, PipelineError> {
        let file = request.file.ok_or(PipelineError::NoFileProvided)?;
        if file.bytes.is_empty() {
            return Err(PipelineError::EmptyFile);
        }

        let source_locale = resolve_locale(&request.input_language);
        let target_locale = resolve_locale(&request.output_language);
        for (language, locale) in [
            (&request.input_language, source_locale),
            (&request.output_language, target_locale),
        ] {
            if !is_supported_language(language) {
                tracing::debug!(language = %language, locale, "Unrecognized language, using fallback locale");
            }
        }

        let object_key = ObjectKey::for_upload(file.filename.as_deref().unwrap_or_default());
        let mut metadata = ObjectMetadata::default()
            .with_entry("input-language", source_locale)
            .with_entry("output-language", target_locale);
        if let Some(content_type) = file.content_type {
            metadata = metadata.with_content_type(content_type);
        }

        let content_length = file.bytes.len() as u64;
        self.store
            .put(&object_key, file.bytes, &metadata)
            .await
            .map_err(|e| PipelineError::upstream(Stage::Upload, e))?;

        tracing::info!(
            object_key = %object_key,
            bytes = content_length,
            source_locale,
            target_locale,
            "Audio uploaded"
        );

        Ok(UploadedAudio {
            object_key,
            source_locale: source_locale.to_string(),
            target_locale: target_locale.to_string(),
            content_length,
        })
    }

    #[tracing::instrument(skip_all, fields(object_key = %uploaded.object_key))]
    pub async fn transcribe(
        &self,
        uploaded: &UploadedAudio,
    ) -> Result<TranscribedAudio, PipelineError> {
        let media_format = uploaded
            .object_key
            .extension()
            .and_then(MediaFormat::from_extension)
            .unwrap_or(self.config.default_media_format);

        let job = TranscriptionJob::new(
            self.store.object_uri(&uploaded.object_key),
            uploaded.source_locale.as_str(),
            media_format,
            uploaded.object_key.transcript_key(),
        );

        self.transcriber
            .submit(&job)
            .await
            .map_err(|e| PipelineError::upstream(Stage::Transcription, e))?;

        tracing::info!(
            job_name = %job.job_name,
            media_format = %media_format,
            output_key = %job.output_key,
            "Transcription job submitted"
        );

        let completed = JobPoller::new(self.transcriber.as_ref(), self.config.poll_policy)
            .wait_for_completion(&job.job_name)
            .await
            .map_err(|e| match e {
                PollError::Failed { reason } => PipelineError::TranscriptionFailed {
                    job_name: job.job_name.clone(),
                    reason,
                },
                PollError::TimedOut { waited } => PipelineError::TranscriptionTimedOut {
                    job_name: job.job_name.clone(),
                    waited,
                },
                PollError::Status(source) => PipelineError::upstream(Stage::Transcription, source),
            })?;

        tracing::info!(
            job_name = %job.job_name,
            polls = completed.polls,
            waited_secs = completed.waited.as_secs(),
            transcript_uri = ?completed.transcript_uri,
            "Transcription job completed"
        );

        Ok(TranscribedAudio {
            transcript_key: job.output_key,
            job_name: job.job_name,
            source_locale: uploaded.source_locale.clone(),
            target_locale: uploaded.target_locale.clone(),
        })
    }

    #[tracing::instrument(skip_all, fields(transcript_key = %transcribed.transcript_key))]
    pub async fn translate(
        &self,
        transcribed: &TranscribedAudio,
    ) -> Result<Translation, PipelineError> {
        let key = &transcribed.transcript_key;
        let parse_error = |reason: String| PipelineError::TranscriptParseError {
            key: key.to_string(),
            reason,
        };

        let raw = self
            .store
            .fetch(key)
            .await
            .map_err(|e| PipelineError::upstream(Stage::Translation, e))?;
        let raw = std::str::from_utf8(&raw)
            .map_err(|_| parse_error(TranscriptParseError::InvalidEncoding.to_string()))?;
        let transcript =
            Transcript::from_job_output(key.clone(), raw).map_err(|e| parse_error(e.to_string()))?;

        tracing::debug!(chars = transcript.text.len(), "Transcript loaded");

        let translated_text = self
            .translator
            .translate(
                &transcript.text,
                &transcribed.source_locale,
                &transcribed.target_locale,
            )
            .await
            .map_err(|e| PipelineError::upstream(Stage::Translation, e))?;

        let object_key = key.translation_key();
        self.store
            .put(
                &object_key,
                Bytes::from(translated_text.clone()),
                &ObjectMetadata::default().with_content_type("text/plain"),
            )
            .await
            .map_err(|e| PipelineError::upstream(Stage::Translation, e))?;

        tracing::info!(
            object_key = %object_key,
            chars = translated_text.len(),
            "Translation stored"
        );

        Ok(Translation {
            source_text: transcript.text,
            translated_text,
            source_locale: transcribed.source_locale.clone(),
            target_locale: transcribed.target_locale.clone(),
            object_key,
        })
    }

    #[tracing::instrument(skip_all, fields(locale = %translation.target_locale))]
    pub async fn synthesize(&self, translation: &Translation) -> Result<PipelineResult, PipelineError> {
        let voice = resolve_voice(&translation.target_locale);
        let request = SynthesisRequest {
            text: translation.translated_text.clone(),
            locale: translation.target_locale.clone(),
            voice: voice.to_string(),
            engine: self.config.synthesis_engine,
            output_bucket: self.store.bucket().to_string(),
            output_prefix: FINAL_AUDIO_FOLDER.to_string(),
        };

        let task = self
            .synthesizer
            .submit(&request)
            .await
            .map_err(|e| PipelineError::upstream(Stage::Synthesis, e))?;

        tracing::info!(
            voice,
            task_id = ?task.task_id,
            output_uri = %task.output_uri,
            "Speech synthesis task submitted"
        );

        // Synthesis is not polled: the returned URI is taken as the finished object.
        let location = StoredObjectLocation::parse_uri(&task.output_uri).map_err(|source| {
            PipelineError::SynthesisUriMalformed {
                uri: task.output_uri.clone(),
                source,
            }
        })?;

        if !location.key.is_in_folder(FINAL_AUDIO_FOLDER) {
            tracing::warn!(
                key = %location.key,
                expected_folder = FINAL_AUDIO_FOLDER,
                "Synthesized audio landed outside the expected folder"
            );
        }

        let download_url = self
            .store
            .signed_url(&location, self.config.signed_url_ttl)
            .await
            .map_err(|e| PipelineError::upstream(Stage::Synthesis, e))?;

        Ok(PipelineResult {
            download_url,
            expires_in: self.config.signed_url_ttl,
            audio_key: location.key,
        })
    }
}
