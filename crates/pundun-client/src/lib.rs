// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client seam for the pundun key/value table store.
//!
//! The wire protocol lives in an external client library. This crate
//! defines the [`StoreClient`] trait the adapter is written against, the
//! fixed [`TableOptions`] bundle submitted at table creation, and the
//! tagged [`StoreOutcome`] that replaces the store's "OK or error map"
//! response convention at the adapter boundary.

pub mod client;
pub mod error;
pub mod outcome;
pub mod table;

pub use client::StoreClient;
pub use error::ClientError;
pub use outcome::{StoreFailure, StoreOutcome, TABLE_EXISTS_TERM};
pub use table::{
    Comparator, DataModel, KEY_FIELDS, Precision, TableOptions, TableType, Tda, TimeMargin,
    TimeUnit,
};
