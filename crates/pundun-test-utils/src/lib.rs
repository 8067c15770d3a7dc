// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Pundun output adapter.
//!
//! Provides an in-memory store client for fast, deterministic tests
//! without a running pundun server.
//!
//! # Components
//!
//! - [`MockStoreClient`] - Store client that records every call and can inject failures

pub mod mock_store;

pub use mock_store::{MockSession, MockStoreClient, StoreCall, StoredRow};
