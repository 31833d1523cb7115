mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AwsSettings, LoggingSettings, PipelineSettings, ProviderKind, ProviderSettings,
    ServerSettings, Settings, StorageProviderSetting, StorageSettings,
};
