// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system.

use std::path::Path;

use figment::Jail;
use pundun_config::diagnostic::ConfigError;
use pundun_config::{
    load_and_validate, load_and_validate_path, load_and_validate_str, load_config_from_str,
};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[log]
level = "debug"

[output]
host = "pundun.internal:8887"
user = "telegraf"
password = "s3cret"
database = "metrics"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.output.host, "pundun.internal:8887");
    assert_eq!(config.output.user, "telegraf");
    assert_eq!(config.output.password, "s3cret");
    assert_eq!(config.output.database, "metrics");
}

/// Empty input falls back to compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.output.host, "localhost:8887");
    assert_eq!(config.output.database, "telegraf");
}

/// A typo in [output] yields an UnknownKey diagnostic with a suggestion.
#[test]
fn typo_in_output_section_suggests_correction() {
    let toml = r#"
[output]
pasword = "x"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion: Some(s), .. } if key == "pasword" && s == "password"
    )));
}

/// Unknown top-level sections are rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[influxdb]
urls = ["http://localhost:8086"]
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown section");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "influxdb")));
}

/// Wrong value types produce an InvalidType diagnostic.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[output]
database = ["a", "b"]
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject bad config");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { .. })));
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_from_str() {
    let toml = r#"
[output]
host = "no-port"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("host:port"))));
}

/// Local pundun.toml is picked up and PUNDUN_ env vars override it.
#[test]
fn env_overrides_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "pundun.toml",
            r#"
[output]
host = "file-host:8887"
database = "from_file"
"#,
        )?;
        jail.set_env("PUNDUN_OUTPUT_DATABASE", "from_env");
        jail.set_env("PUNDUN_LOG_LEVEL", "warn");

        let config = load_and_validate().expect("layered config should validate");
        assert_eq!(config.output.host, "file-host:8887");
        assert_eq!(config.output.database, "from_env");
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}

/// Explicit paths are loaded and report file-backed diagnostics.
#[test]
fn explicit_path_with_unknown_key_suggests_fix() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[output]\nhots = \"db:8887\"\n")?;

        let errors = load_and_validate_path(Path::new("custom.toml"))
            .expect_err("unknown key should be rejected");
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion: Some(s), .. } if key == "hots" && s == "host"
        )));
        Ok(())
    });
}

/// Explicit paths accept a valid file.
#[test]
fn explicit_path_loads_valid_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[output]\ndatabase = \"cpu_metrics\"\n")?;

        let config =
            load_and_validate_path(Path::new("custom.toml")).expect("valid file should load");
        assert_eq!(config.output.database, "cpu_metrics");
        Ok(())
    });
}
