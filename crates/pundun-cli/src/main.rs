// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pundun-adapter` - companion binary for the pundun output plugin.
//!
//! Prints the plugin's description and sample configuration, checks
//! configuration files, and lists the plugins a host registry would hold.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use pundun_config::{ConfigError, LogConfig, PundunConfig};
use pundun_output::{DESCRIPTION, SAMPLE_CONFIG};
use pundun_plugin::PluginRegistry;

/// Companion tool for the pundun output plugin.
#[derive(Parser, Debug)]
#[command(name = "pundun-adapter", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the plugin description.
    Describe,
    /// Print an example `[output]` configuration block.
    SampleConfig,
    /// Load and validate configuration.
    CheckConfig {
        /// Explicit config file instead of the XDG hierarchy.
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// List registered plugins.
    Plugins,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckConfig { path } => check_config(path.as_deref()),
        Commands::Describe => {
            init_configured_tracing();
            println!("{DESCRIPTION}");
            ExitCode::SUCCESS
        }
        Commands::SampleConfig => {
            init_configured_tracing();
            println!("[output]{SAMPLE_CONFIG}");
            ExitCode::SUCCESS
        }
        Commands::Plugins => {
            init_configured_tracing();
            let registry = builtin_registry();
            for entry in registry.list_all() {
                println!(
                    "{:<12} {:<8} {:<9} {}",
                    entry.manifest.name, entry.manifest.kind, entry.status, entry.manifest.description
                );
            }
            ExitCode::SUCCESS
        }
    }
}

fn check_config(path: Option<&std::path::Path>) -> ExitCode {
    let loaded = load(path);
    init_tracing(&log_level(loaded.as_ref().ok()));
    match loaded {
        Ok(config) => {
            info!(
                host = %config.output.host,
                database = %config.output.database,
                "configuration is valid"
            );
            println!(
                "ok: writing to table `{}` at {}",
                config.output.database, config.output.host
            );
            ExitCode::SUCCESS
        }
        Err(errors) => {
            pundun_config::render_errors(&errors);
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing from the configuration hierarchy, if it loads.
fn init_configured_tracing() {
    init_tracing(&log_level(pundun_config::load_and_validate().ok().as_ref()));
}

/// Log level from a loaded configuration, or the default when it is invalid.
fn log_level(loaded: Option<&PundunConfig>) -> String {
    loaded.map_or_else(|| LogConfig::default().level, |config| config.log.level.clone())
}

fn load(path: Option<&std::path::Path>) -> Result<PundunConfig, Vec<ConfigError>> {
    match path {
        Some(path) => pundun_config::load_and_validate_path(path),
        None => pundun_config::load_and_validate(),
    }
}

/// Registry listing the plugins compiled into this binary.
///
/// No store client is linked here, so entries carry manifests only.
fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(pundun_output::manifest(), None);
    debug!(plugins = registry.len(), "built plugin registry");
    registry
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pundun={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_config_with_path() {
        let cli = Cli::try_parse_from(["pundun-adapter", "check-config", "--path", "/tmp/p.toml"])
            .expect("should parse");
        match cli.command {
            Commands::CheckConfig { path } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/p.toml")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn builtin_registry_lists_pundun_output() {
        let registry = builtin_registry();
        let entry = registry.get("pundun").expect("pundun should be listed");
        assert_eq!(entry.manifest.kind, pundun_core::PluginKind::Output);
        assert!(entry.factory.is_none());
    }

    #[test]
    fn log_level_follows_config_or_falls_back() {
        let config = pundun_config::load_and_validate_str("[log]\nlevel = \"debug\"\n")
            .expect("config should validate");
        assert_eq!(log_level(Some(&config)), "debug");

        let invalid = pundun_config::load_and_validate_str("[log]\nlevel = \"loud\"\n");
        assert!(invalid.is_err());
        assert_eq!(log_level(invalid.as_ref().ok()), "info");
    }

    #[test]
    fn printed_sample_config_validates() {
        let text = format!("[output]{SAMPLE_CONFIG}");
        assert!(pundun_config::load_and_validate_str(&text).is_ok());
    }
}
