// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pundun output adapter.
//!
//! This crate provides the host plugin contract, the metric data model,
//! and the error type shared by the store client, the registry, and the
//! adapter itself.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PundunError;
pub use types::{
    Columns, ConnectStatus, FieldValue, HealthStatus, Metric, PluginKind, RowKey, TableState,
    WriteReport,
};

pub use traits::{OutputAdapter, PluginAdapter};
