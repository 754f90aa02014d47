//! Tests for configuration module.

use super::*;
use config::{File, FileFormat};

#[test_log::test]
fn test_defaults_without_sources() {
    tracing::debug!("Building settings from defaults only");

    let builder = Settings::builder().expect("defaults should register");
    let settings = Settings::from_builder(builder).expect("defaults should deserialize");

    assert!(settings.interval.allow_empty_time);
    assert_eq!(settings.interval, IntervalConfig::default());
}

#[test]
fn test_toml_source_overrides_default() {
    let builder = Settings::builder()
        .expect("defaults should register")
        .add_source(File::from_str(
            "[interval]\nallow_empty_time = false\n",
            FileFormat::Toml,
        ));

    let settings = Settings::from_builder(builder).expect("toml should deserialize");
    assert!(!settings.interval.allow_empty_time);
}

#[test]
fn test_json_source_overrides_default() {
    let builder = Settings::builder()
        .expect("defaults should register")
        .add_source(File::from_str(
            r#"{"interval": {"allow_empty_time": false}}"#,
            FileFormat::Json,
        ));

    let settings = Settings::from_builder(builder).expect("json should deserialize");
    assert!(!settings.interval.allow_empty_time);
}

#[test]
fn test_wrong_type_is_rejected() {
    let builder = Settings::builder()
        .expect("defaults should register")
        .add_source(File::from_str(
            "[interval]\nallow_empty_time = \"sometimes\"\n",
            FileFormat::Toml,
        ));

    assert!(Settings::from_builder(builder).is_err());
}

#[test]
fn test_settings_debug() {
    let settings = Settings {
        interval: IntervalConfig {
            allow_empty_time: false,
        },
    };

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("allow_empty_time"));
}

#[test]
fn test_config_key_constants() {
    use crate::constants::{ALLOW_EMPTY_TIME_KEY, ENV_ALLOW_EMPTY_TIME};

    assert_eq!(ALLOW_EMPTY_TIME_KEY, "interval.allow_empty_time");
    assert_eq!(ENV_ALLOW_EMPTY_TIME, "NULLVAL__INTERVAL__ALLOW_EMPTY_TIME");
}

#[test]
fn test_builder_registers_default_under_key() {
    let config = Settings::builder()
        .expect("defaults should register")
        .build()
        .expect("defaults should build");

    assert!(
        config
            .get_bool(crate::constants::ALLOW_EMPTY_TIME_KEY)
            .expect("key should be set")
    );
}
