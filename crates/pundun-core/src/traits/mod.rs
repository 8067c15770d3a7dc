// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin trait definitions for the host contract.
//!
//! All plugins extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod output;

pub use adapter::PluginAdapter;
pub use output::OutputAdapter;
