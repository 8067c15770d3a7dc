// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifests describing registered plugins.

use pundun_core::PluginKind;
use serde::{Deserialize, Serialize};

/// Metadata describing a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique registry name of the plugin (e.g., "pundun").
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Human-readable description.
    pub description: String,
    /// Kind of plugin.
    pub kind: PluginKind,
    /// Configuration keys the plugin reads (e.g., ["host", "database"]).
    #[serde(default)]
    pub config_keys: Vec<String>,
}

impl PluginManifest {
    /// Create a manifest with no declared config keys.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        kind: PluginKind,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            kind,
            config_keys: Vec::new(),
        }
    }

    /// Declare the configuration keys the plugin reads.
    pub fn with_config_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config_keys = keys.into_iter().map(Into::into).collect();
        self
    }
}
