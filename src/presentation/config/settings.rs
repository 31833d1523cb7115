use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::{PipelineConfig, PollPolicy};
use crate::domain::{MediaFormat, SynthesisEngine};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub aws: AwsSettings,
    pub providers: ProviderSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>.toml` (optional) under `APP_*` variables,
    /// e.g. `APP_STORAGE__BUCKET`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_upload_size_bytes: 50 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    #[default]
    S3,
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub bucket: String,
    pub local_path: String,
    pub public_base_url: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::S3,
            bucket: "cloud-translator-app-bucket".to_string(),
            local_path: "./data".to_string(),
            public_base_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AwsSettings {
    pub region: String,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            region: "eu-west-3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Aws,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// Transcript returned by the mock speech-to-text runner.
    pub mock_transcript: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Aws,
            mock_transcript: "hello from babelcast".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub poll_initial_interval_secs: u64,
    pub poll_max_interval_secs: u64,
    pub poll_backoff_multiplier: f64,
    pub poll_max_wait_secs: u64,
    pub signed_url_ttl_secs: u64,
    pub default_media_format: MediaFormat,
    pub synthesis_engine: SynthesisEngine,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            poll_initial_interval_secs: 5,
            poll_max_interval_secs: 30,
            poll_backoff_multiplier: 1.5,
            poll_max_wait_secs: 15 * 60,
            signed_url_ttl_secs: 3600,
            default_media_format: MediaFormat::Webm,
            synthesis_engine: SynthesisEngine::Neural,
        }
    }
}

/// Out-of-range poll values are clamped: intervals and budget to at least one
/// second, the multiplier to a finite value of at least 1.
impl From<&PipelineSettings> for PipelineConfig {
    fn from(settings: &PipelineSettings) -> Self {
        let initial_interval = Duration::from_secs(settings.poll_initial_interval_secs.max(1));
        let multiplier = if settings.poll_backoff_multiplier.is_finite() {
            settings.poll_backoff_multiplier.max(1.0)
        } else {
            1.0
        };

        Self {
            poll_policy: PollPolicy {
                initial_interval,
                max_interval: Duration::from_secs(settings.poll_max_interval_secs)
                    .max(initial_interval),
                multiplier,
                max_wait: Duration::from_secs(settings.poll_max_wait_secs).max(initial_interval),
            },
            signed_url_ttl: Duration::from_secs(settings.signed_url_ttl_secs),
            default_media_format: settings.default_media_format,
            synthesis_engine: settings.synthesis_engine,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
