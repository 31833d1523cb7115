pub mod language;
mod job_status;
mod media_format;
mod object_key;
mod storage_location;
mod synthesis;
mod transcript;
mod transcription_job;

pub use job_status::TranscriptionJobStatus;
pub use language::{DEFAULT_LOCALE, DEFAULT_VOICE, resolve_locale, resolve_voice};
pub use media_format::MediaFormat;
pub use object_key::{
    FINAL_AUDIO_FOLDER, ObjectKey, TRANSCRIPTION_FOLDER, TRANSLATION_FOLDER, VOICE_INPUT_FOLDER,
};
pub use storage_location::{LocationParseError, StoredObjectLocation};
pub use synthesis::{SynthesisEngine, SynthesisRequest, SynthesisTask};
pub use transcript::{Transcript, TranscriptDocument, TranscriptParseError};
pub use transcription_job::TranscriptionJob;
