// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as the `host:port` shape of the server address.

use crate::diagnostic::ConfigError;
use crate::model::PundunConfig;

/// Log levels accepted by `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PundunConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.output.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "output.host must not be empty".to_string(),
        });
    } else {
        match host.rsplit_once(':') {
            Some((name, port)) if !name.is_empty() && port.parse::<u16>().is_ok() => {}
            _ => errors.push(ConfigError::Validation {
                message: format!("output.host `{host}` must be in `host:port` form"),
            }),
        }
    }

    if config.output.database.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "output.database must not be empty".to_string(),
        });
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
