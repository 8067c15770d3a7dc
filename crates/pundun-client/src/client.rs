// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The store client trait the output adapter is written against.

use async_trait::async_trait;

use pundun_core::{Columns, RowKey};

use crate::error::ClientError;
use crate::outcome::StoreOutcome;
use crate::table::TableOptions;

/// Session-oriented client for the pundun table store.
///
/// Implementations wrap the network protocol. A session is obtained with
/// [`connect`](StoreClient::connect), passed by reference to every request,
/// and consumed by [`disconnect`](StoreClient::disconnect).
#[async_trait]
pub trait StoreClient: Send + Sync + 'static {
    /// Opaque authenticated connection handle.
    type Session: Send + Sync + 'static;

    /// Opens an authenticated session with the server at `host` ("host:port").
    async fn connect(
        &self,
        host: &str,
        user: &str,
        password: &str,
    ) -> Result<Self::Session, ClientError>;

    /// Requests creation of `table` with the given key schema and options.
    async fn create_table(
        &self,
        session: &Self::Session,
        table: &str,
        key_fields: &[&str],
        options: &TableOptions,
    ) -> StoreOutcome;

    /// Writes one row to `table`.
    async fn write(
        &self,
        session: &Self::Session,
        table: &str,
        key: &RowKey,
        columns: &Columns,
    ) -> StoreOutcome;

    /// Releases the session.
    async fn disconnect(&self, session: Self::Session);
}
