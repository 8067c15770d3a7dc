// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry and manifests for host plugins.
//!
//! The host owns a [`PluginRegistry`] and passes it to each plugin crate's
//! registration function at startup. Each entry pairs a manifest with an
//! optional factory that builds adapter instances from configuration.

pub mod manifest;
pub mod registry;

pub use manifest::PluginManifest;
pub use registry::{PluginEntry, PluginFactory, PluginRegistry, PluginStatus};
