// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pundun.toml` > `~/.config/pundun/pundun.toml` > `/etc/pundun/pundun.toml`
//! with environment variable overrides via `PUNDUN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PundunConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/pundun/pundun.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "pundun.toml";

/// Path of the per-user configuration file, if a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pundun").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pundun/pundun.toml` (system-wide)
/// 3. `~/.config/pundun/pundun.toml` (user XDG config)
/// 4. `./pundun.toml` (local directory)
/// 5. `PUNDUN_*` environment variables
pub fn load_config() -> Result<PundunConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PundunConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PundunConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PundunConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PundunConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PundunConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that only the section
/// prefix is turned into a dot. `PUNDUN_OUTPUT_HOST` maps to `output.host`
/// and `PUNDUN_LOG_LEVEL` to `log.level`.
fn env_provider() -> Env {
    Env::prefixed("PUNDUN_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("output_", "output.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
