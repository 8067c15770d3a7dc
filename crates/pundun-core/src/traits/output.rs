// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output adapter trait for plugins that forward metric batches to a sink.

use async_trait::async_trait;

use crate::error::PundunError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ConnectStatus, Metric, WriteReport};

/// Adapter for delivering collected metrics to an external destination.
///
/// The host drives the lifecycle sequentially on a single instance:
/// `connect` once, `write` for every batch, `close` on shutdown. Methods
/// take `&mut self`, so concurrent calls on one instance do not compile.
#[async_trait]
pub trait OutputAdapter: PluginAdapter {
    /// Returns a one-line human-readable description of the plugin.
    fn description(&self) -> &str;

    /// Returns an example configuration block for the plugin.
    fn sample_config(&self) -> &str;

    /// Opens the remote session and prepares the destination.
    ///
    /// Store-side failures are reported in the returned [`ConnectStatus`],
    /// not as an `Err`.
    async fn connect(&mut self) -> Result<ConnectStatus, PundunError>;

    /// Delivers a batch of metrics, one remote write per metric.
    ///
    /// Individual write failures are counted in the [`WriteReport`] and
    /// do not abort the batch.
    async fn write(&mut self, metrics: &[Metric]) -> Result<WriteReport, PundunError>;

    /// Releases the remote session.
    async fn close(&mut self) -> Result<(), PundunError>;
}
