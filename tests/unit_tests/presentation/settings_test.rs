use std::time::Duration;

use babelcast::application::services::PipelineConfig;
use babelcast::domain::{MediaFormat, SynthesisEngine};
use babelcast::infrastructure::observability::TracingConfig;
use babelcast::presentation::config::{
    Environment, LoggingSettings, PipelineSettings, ProviderKind, Settings,
    StorageProviderSetting,
};

#[test]
fn given_known_environment_names_when_parsing_then_maps_aliases() {
    assert_eq!(Environment::try_from("local".to_string()).unwrap(), Environment::Local);
    assert_eq!(
        Environment::try_from("Development".to_string()).unwrap(),
        Environment::Local
    );
    assert_eq!(Environment::try_from("test".to_string()).unwrap(), Environment::Test);
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(err.contains("staging"));
}

#[test]
fn given_environment_when_building_settings_file_then_uses_appsettings_prefix() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
}

#[test]
fn given_default_settings_when_created_then_match_deployment_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.storage.provider, StorageProviderSetting::S3);
    assert_eq!(settings.storage.bucket, "cloud-translator-app-bucket");
    assert_eq!(settings.aws.region, "eu-west-3");
    assert_eq!(settings.providers.kind, ProviderKind::Aws);
    assert_eq!(settings.pipeline.signed_url_ttl_secs, 3600);
}

#[test]
fn given_missing_settings_file_when_loading_then_falls_back_to_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();
    assert_eq!(settings.pipeline.poll_initial_interval_secs, 5);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn given_pipeline_settings_when_converting_then_builds_pipeline_config() {
    let settings = PipelineSettings {
        poll_initial_interval_secs: 2,
        poll_max_interval_secs: 10,
        poll_backoff_multiplier: 3.0,
        poll_max_wait_secs: 120,
        signed_url_ttl_secs: 60,
        default_media_format: MediaFormat::Ogg,
        synthesis_engine: SynthesisEngine::Standard,
    };

    let config = PipelineConfig::from(&settings);

    assert_eq!(config.poll_policy.initial_interval, Duration::from_secs(2));
    assert_eq!(config.poll_policy.max_interval, Duration::from_secs(10));
    assert_eq!(config.poll_policy.multiplier, 3.0);
    assert_eq!(config.poll_policy.max_wait, Duration::from_secs(120));
    assert_eq!(config.signed_url_ttl, Duration::from_secs(60));
    assert_eq!(config.default_media_format, MediaFormat::Ogg);
    assert_eq!(config.synthesis_engine, SynthesisEngine::Standard);
}

#[test]
fn given_json_logging_setting_when_building_tracing_config_then_enables_json() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.level, "warn");
    assert_eq!(config.environment, "prod");
}

#[test]
fn given_zero_poll_values_when_converting_then_clamps_to_one_second() {
    let settings = PipelineSettings {
        poll_initial_interval_secs: 0,
        poll_max_interval_secs: 0,
        poll_max_wait_secs: 0,
        ..PipelineSettings::default()
    };

    let policy = PipelineConfig::from(&settings).poll_policy;

    assert_eq!(policy.initial_interval, Duration::from_secs(1));
    assert_eq!(policy.max_interval, Duration::from_secs(1));
    assert_eq!(policy.max_wait, Duration::from_secs(1));
}

#[test]
fn given_non_finite_or_shrinking_multiplier_when_converting_then_uses_one() {
    for multiplier in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.25] {
        let settings = PipelineSettings {
            poll_backoff_multiplier: multiplier,
            ..PipelineSettings::default()
        };

        assert_eq!(PipelineConfig::from(&settings).poll_policy.multiplier, 1.0);
    }
}
