use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Container format of an uploaded recording, as understood by the
/// transcription provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Mp3,
    Mp4,
    Wav,
    Flac,
    Ogg,
    Amr,
    #[default]
    Webm,
}

impl MediaFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "mp3",
            MediaFormat::Mp4 => "mp4",
            MediaFormat::Wav => "wav",
            MediaFormat::Flac => "flac",
            MediaFormat::Ogg => "ogg",
            MediaFormat::Amr => "amr",
            MediaFormat::Webm => "webm",
        }
    }

    /// Returns `None` for extensions that are not supported audio containers.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "mp3" => Some(MediaFormat::Mp3),
            "mp4" | "m4a" => Some(MediaFormat::Mp4),
            "wav" => Some(MediaFormat::Wav),
            "flac" => Some(MediaFormat::Flac),
            "ogg" | "oga" => Some(MediaFormat::Ogg),
            "amr" => Some(MediaFormat::Amr),
            "webm" => Some(MediaFormat::Webm),
            _ => None,
        }
    }
}

impl FromStr for MediaFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| format!("Invalid media format: {}", s))
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
