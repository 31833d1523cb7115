mod object_store_gateway;
mod speech_synthesizer;
mod text_translator;
mod transcription_job_runner;

pub use object_store_gateway::{ObjectMetadata, ObjectStoreError, ObjectStoreGateway};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use text_translator::{TextTranslator, TranslationError};
pub use transcription_job_runner::{TranscriptionJobError, TranscriptionJobRunner};
