// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all host plugins must implement.

use async_trait::async_trait;

use crate::error::PundunError;
use crate::types::{HealthStatus, PluginKind};

/// The base trait for all host plugins.
///
/// Provides identity and health check capabilities. Lifecycle operations
/// live on the kind-specific traits such as [`OutputAdapter`](super::OutputAdapter).
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the registry name of this plugin.
    fn name(&self) -> &str;

    /// Returns the semantic version of this plugin.
    fn version(&self) -> semver::Version;

    /// Returns the kind of plugin (input, output, etc.).
    fn kind(&self) -> PluginKind;

    /// Performs a health check and returns the plugin's current status.
    async fn health_check(&self) -> Result<HealthStatus, PundunError>;
}
