// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory store client for deterministic testing.
//!
//! `MockStoreClient` implements `StoreClient` against a shared in-memory
//! table set. Clones share state, so a test can hand one clone to the
//! adapter and inspect recorded calls through another.
//!
//! Rejections are produced the way a real server answers, as an error map
//! keyed by subsystem, and translated with [`StoreOutcome::from_error_map`].

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::trace;

use pundun_client::{
    ClientError, StoreClient, StoreFailure, StoreOutcome, TableOptions, TABLE_EXISTS_TERM,
};
use pundun_core::{Columns, RowKey};

/// Session handle issued by [`MockStoreClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockSession {
    pub id: u64,
}

/// A request observed by the mock, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Connect {
        host: String,
        user: String,
        password: String,
    },
    CreateTable {
        session: u64,
        table: String,
        key_fields: Vec<String>,
        options: TableOptions,
    },
    Write {
        session: u64,
        table: String,
        key: RowKey,
        columns: Columns,
    },
    Disconnect {
        session: u64,
    },
}

/// A row accepted by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    pub table: String,
    pub key: RowKey,
    pub columns: Columns,
}

/// Failure injection settings, fixed before the client is shared.
#[derive(Debug, Clone, Default)]
struct Behavior {
    refuse_connect: Option<String>,
    existing_tables: BTreeSet<String>,
    create_failure: Option<StoreFailure>,
    rejected_measurements: HashSet<String>,
}

#[derive(Debug, Default)]
struct MockState {
    next_session: u64,
    open_sessions: HashSet<u64>,
    tables: BTreeSet<String>,
    rows: Vec<StoredRow>,
    calls: Vec<StoreCall>,
}

/// A store client that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MockStoreClient {
    behavior: Arc<Behavior>,
    state: Arc<Mutex<MockState>>,
}

impl MockStoreClient {
    /// Create a mock that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `connect` fail with the given message.
    pub fn refusing_connections(mut self, message: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.behavior).refuse_connect = Some(message.into());
        self
    }

    /// Pretend `table` was created before the test started.
    pub fn with_existing_table(mut self, table: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.behavior)
            .existing_tables
            .insert(table.into());
        self
    }

    /// Make every `create_table` fail with the given code and message.
    pub fn failing_table_creation(
        mut self,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.behavior).create_failure = Some(StoreFailure {
            code: code.into(),
            message: message.into(),
        });
        self
    }

    /// Reject writes whose key carries the given measurement name.
    pub fn rejecting_measurement(mut self, meas: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.behavior)
            .rejected_measurements
            .insert(meas.into());
        self
    }

    /// All calls observed so far.
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().await.calls.clone()
    }

    /// Only the write calls observed so far.
    pub async fn write_calls(&self) -> Vec<StoreCall> {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|c| matches!(c, StoreCall::Write { .. }))
            .cloned()
            .collect()
    }

    /// Rows accepted so far, in write order.
    pub async fn rows(&self) -> Vec<StoredRow> {
        self.state.lock().await.rows.clone()
    }

    /// Number of sessions currently open.
    pub async fn open_sessions(&self) -> usize {
        self.state.lock().await.open_sessions.len()
    }

    /// Returns true if `table` exists, either seeded or created.
    pub async fn has_table(&self, table: &str) -> bool {
        self.behavior.existing_tables.contains(table)
            || self.state.lock().await.tables.contains(table)
    }
}

/// Answer with a single-entry error map, as the server does.
fn rejected(code: &str, term: &str) -> StoreOutcome {
    StoreOutcome::from_error_map(&BTreeMap::from([(code.to_string(), term.to_string())]))
}

fn closed_session() -> StoreOutcome {
    rejected("session", "session is not open")
}

#[async_trait]
impl StoreClient for MockStoreClient {
    type Session = MockSession;

    async fn connect(
        &self,
        host: &str,
        user: &str,
        password: &str,
    ) -> Result<MockSession, ClientError> {
        let mut state = self.state.lock().await;
        state.calls.push(StoreCall::Connect {
            host: host.to_string(),
            user: user.to_string(),
            password: password.to_string(),
        });

        if let Some(message) = &self.behavior.refuse_connect {
            return Err(ClientError::Connect {
                host: host.to_string(),
                message: message.clone(),
            });
        }

        state.next_session += 1;
        let id = state.next_session;
        state.open_sessions.insert(id);
        trace!(session = id, "mock session opened");
        Ok(MockSession { id })
    }

    async fn create_table(
        &self,
        session: &MockSession,
        table: &str,
        key_fields: &[&str],
        options: &TableOptions,
    ) -> StoreOutcome {
        let mut state = self.state.lock().await;
        state.calls.push(StoreCall::CreateTable {
            session: session.id,
            table: table.to_string(),
            key_fields: key_fields.iter().map(|f| f.to_string()).collect(),
            options: options.clone(),
        });

        if !state.open_sessions.contains(&session.id) {
            return closed_session();
        }
        if let Some(failure) = &self.behavior.create_failure {
            return rejected(&failure.code, &failure.message);
        }
        if self.behavior.existing_tables.contains(table) || !state.tables.insert(table.to_string())
        {
            return rejected("system", TABLE_EXISTS_TERM);
        }
        StoreOutcome::Ok
    }

    async fn write(
        &self,
        session: &MockSession,
        table: &str,
        key: &RowKey,
        columns: &Columns,
    ) -> StoreOutcome {
        let mut state = self.state.lock().await;
        state.calls.push(StoreCall::Write {
            session: session.id,
            table: table.to_string(),
            key: key.clone(),
            columns: columns.clone(),
        });

        if !state.open_sessions.contains(&session.id) {
            return closed_session();
        }
        if !self.behavior.existing_tables.contains(table) && !state.tables.contains(table) {
            return rejected("system", "{error,no_such_table}");
        }
        if self.behavior.rejected_measurements.contains(&key.meas) {
            return rejected("system", "{error,write_rejected}");
        }

        state.rows.push(StoredRow {
            table: table.to_string(),
            key: key.clone(),
            columns: columns.clone(),
        });
        StoreOutcome::Ok
    }

    async fn disconnect(&self, session: MockSession) {
        let mut state = self.state.lock().await;
        state.calls.push(StoreCall::Disconnect { session: session.id });
        state.open_sessions.remove(&session.id);
        trace!(session = session.id, "mock session closed");
    }
}
