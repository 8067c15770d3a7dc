// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry integration for the pundun output plugin.

use pundun_client::StoreClient;
use pundun_config::OutputConfig;
use pundun_core::{OutputAdapter, PluginKind, PundunError};
use pundun_plugin::{PluginFactory, PluginManifest, PluginRegistry};

use crate::{PundunOutput, DESCRIPTION, PLUGIN_NAME};

/// Builds [`PundunOutput`] instances that share a store client.
pub struct PundunFactory<C> {
    client: C,
}

impl<C: StoreClient + Clone> PundunFactory<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: StoreClient + Clone> PluginFactory for PundunFactory<C> {
    fn kind(&self) -> PluginKind {
        PluginKind::Output
    }

    fn create(&self, config: &serde_json::Value) -> Result<Box<dyn OutputAdapter>, PundunError> {
        let config: OutputConfig = serde_json::from_value(config.clone())
            .map_err(|e| PundunError::Config(format!("invalid {PLUGIN_NAME} output config: {e}")))?;
        Ok(Box::new(PundunOutput::new(self.client.clone(), config)))
    }
}

/// Manifest describing the pundun output plugin.
pub fn manifest() -> PluginManifest {
    PluginManifest::new(
        PLUGIN_NAME,
        env!("CARGO_PKG_VERSION"),
        DESCRIPTION,
        PluginKind::Output,
    )
    .with_config_keys(["host", "user", "password", "database"])
}

/// Register the pundun output plugin in `registry` under [`PLUGIN_NAME`].
///
/// Also describes the plugin's metrics, so call it after the host installs
/// its metrics recorder.
pub fn register<C: StoreClient + Clone>(registry: &mut PluginRegistry, client: C) {
    crate::recording::register_metrics();
    registry.register(manifest(), Some(Box::new(PundunFactory::new(client))));
}
