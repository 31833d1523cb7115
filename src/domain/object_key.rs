use std::fmt;

use uuid::Uuid;

pub const VOICE_INPUT_FOLDER: &str = "voice_input/";
pub const TRANSCRIPTION_FOLDER: &str = "transcription_texts/";
pub const TRANSLATION_FOLDER: &str = "translate_texts/";
pub const FINAL_AUDIO_FOLDER: &str = "final_audio/";

const FALLBACK_FILENAME: &str = "audio.webm";

/// Full key of an object inside the pipeline bucket.
///
/// Keys of later stages are derived from the key of the previous stage, so an
/// upload can be traced through every folder without a side database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Creates a fresh, globally unique key for an uploaded file under
    /// `voice_input/`.
    pub fn for_upload(filename: &str) -> Self {
        Self(format!(
            "{}{}_{}",
            VOICE_INPUT_FOLDER,
            Uuid::new_v4(),
            sanitize_filename(filename)
        ))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment of the key.
    pub fn basename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Basename with its final extension removed.
    pub fn stem(&self) -> &str {
        let basename = self.basename();
        match basename.rfind('.') {
            Some(idx) if idx + 1 < basename.len() => &basename[..idx],
            _ => basename,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        let basename = self.basename();
        match basename.rfind('.') {
            Some(idx) if idx + 1 < basename.len() => Some(&basename[idx + 1..]),
            _ => None,
        }
    }

    /// `transcription_texts/<stem>.json`
    pub fn transcript_key(&self) -> ObjectKey {
        Self(format!("{}{}.json", TRANSCRIPTION_FOLDER, self.stem()))
    }

    /// `translate_texts/<stem>_translated.txt`
    pub fn translation_key(&self) -> ObjectKey {
        Self(format!("{}{}_translated.txt", TRANSLATION_FOLDER, self.stem()))
    }

    pub fn is_in_folder(&self, folder: &str) -> bool {
        self.0.starts_with(folder)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keeps the client-supplied basename and replaces characters that provider
/// job APIs reject in output keys.
fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let sanitized: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(['.', '_']).is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        sanitized
    }
}
