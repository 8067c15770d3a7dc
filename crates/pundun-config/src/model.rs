// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Pundun output adapter.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to the sample configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PundunConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Destination store settings for the output plugin.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Connection and destination settings for the pundun output plugin.
///
/// Fixed for the lifetime of an adapter instance.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Server location in `host:port` form.
    #[serde(default = "default_host")]
    pub host: String,

    /// Account name used to open the session.
    #[serde(default = "default_user")]
    pub user: String,

    /// Account password used to open the session.
    #[serde(default = "default_password")]
    pub password: String,

    /// Destination table name.
    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user: default_user(),
            password: default_password(),
            database: default_database(),
        }
    }
}

impl fmt::Debug for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .finish()
    }
}

fn default_host() -> String {
    "localhost:8887".to_string()
}

fn default_user() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin".to_string()
}

fn default_database() -> String {
    "telegraf".to_string()
}
