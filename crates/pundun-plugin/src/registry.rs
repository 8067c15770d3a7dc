// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for host plugins.
//!
//! The `PluginRegistry` stores `PluginEntry` records keyed by plugin name.
//! It is an ordinary value owned by the host; plugins register themselves
//! into it through an explicit call rather than through process-wide state.

use std::collections::HashMap;

use pundun_core::{OutputAdapter, PluginKind, PundunError};
use tracing::debug;

use crate::manifest::PluginManifest;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is active and can be instantiated.
    Enabled,
    /// Plugin is explicitly disabled by the operator.
    Disabled,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Factory for creating output adapter instances from configuration.
///
/// Factories are optional -- the registry can hold manifests without
/// factories for listing purposes.
pub trait PluginFactory: Send + Sync {
    /// The kind of plugin this factory produces.
    fn kind(&self) -> PluginKind;

    /// Create a new, unconnected adapter from the given configuration.
    fn create(&self, config: &serde_json::Value) -> Result<Box<dyn OutputAdapter>, PundunError>;
}

/// A single entry in the plugin registry.
pub struct PluginEntry {
    pub manifest: PluginManifest,
    pub status: PluginStatus,
    pub factory: Option<Box<dyn PluginFactory>>,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("manifest", &self.manifest)
            .field("status", &self.status)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

/// Registry of host plugins keyed by name.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    entries: HashMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin with default status `Enabled`.
    ///
    /// Registering a name twice replaces the earlier entry.
    pub fn register(&mut self, manifest: PluginManifest, factory: Option<Box<dyn PluginFactory>>) {
        self.register_with_status(manifest, factory, PluginStatus::Enabled);
    }

    /// Register a plugin with an explicit status.
    pub fn register_with_status(
        &mut self,
        manifest: PluginManifest,
        factory: Option<Box<dyn PluginFactory>>,
        status: PluginStatus,
    ) {
        debug!(plugin = %manifest.name, kind = %manifest.kind, %status, "registering plugin");
        let name = manifest.name.clone();
        self.entries.insert(
            name,
            PluginEntry {
                manifest,
                status,
                factory,
            },
        );
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.get(name)
    }

    /// Get all enabled plugins of the given kind, sorted by name.
    pub fn get_enabled(&self, kind: PluginKind) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self
            .entries
            .values()
            .filter(|e| e.status == PluginStatus::Enabled && e.manifest.kind == kind)
            .collect();
        entries.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        entries
    }

    /// List all plugin entries, sorted by name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        entries
    }

    /// Toggle a plugin's enabled status.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), PundunError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| not_found("unknown", name))?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Instantiate the enabled output plugin registered under `name`.
    ///
    /// Fails with [`PundunError::AdapterNotFound`] if the name is unknown,
    /// disabled, or not an output, and with [`PundunError::Config`] if the
    /// entry has no factory or the factory rejects `config`.
    pub fn create_output(
        &self,
        name: &str,
        config: &serde_json::Value,
    ) -> Result<Box<dyn OutputAdapter>, PundunError> {
        let kind = PluginKind::Output.to_string();
        let entry = self
            .entries
            .get(name)
            .filter(|e| e.status == PluginStatus::Enabled && e.manifest.kind == PluginKind::Output)
            .ok_or_else(|| not_found(&kind, name))?;
        let factory = entry
            .factory
            .as_ref()
            .ok_or_else(|| PundunError::Config(format!("plugin `{name}` has no factory")))?;
        factory.create(config)
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn not_found(kind: &str, name: &str) -> PundunError {
    PundunError::AdapterNotFound {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}
