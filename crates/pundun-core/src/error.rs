// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pundun output adapter.

use thiserror::Error;

/// The primary error type used across the plugin contract and the registry.
///
/// Store-side failures during normal operation are reported through
/// [`ConnectStatus`](crate::types::ConnectStatus) and
/// [`WriteReport`](crate::types::WriteReport) rather than through this type.
/// It is reserved for lifecycle misuse, configuration problems, and
/// registry lookups.
#[derive(Debug, Error)]
pub enum PundunError {
    /// Configuration errors (invalid TOML, missing fields, bad factory input).
    #[error("configuration error: {0}")]
    Config(String),

    /// A write was attempted without a live session.
    #[error("adapter is not connected")]
    NotConnected,

    /// The adapter has been closed and cannot be reused.
    #[error("adapter is closed")]
    Closed,

    /// Requested plugin was not found in the registry, or is disabled.
    #[error("plugin not found: {kind}/{name}")]
    AdapterNotFound { kind: String, name: String },
}
