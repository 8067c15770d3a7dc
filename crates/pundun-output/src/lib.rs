// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output plugin that forwards metric batches to a pundun table store.
//!
//! [`PundunOutput`] opens a session through a [`StoreClient`], makes sure
//! the destination table exists, and writes one row per metric keyed by
//! timestamp and measurement name. Store-side failures are logged and
//! reported through [`ConnectStatus`] and [`WriteReport`]; they never abort
//! a batch or fail the host.

pub mod factory;
pub mod recording;
pub mod translate;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use pundun_client::{KEY_FIELDS, StoreClient, StoreOutcome, TableOptions};
use pundun_config::OutputConfig;
use pundun_core::{
    ConnectStatus, HealthStatus, Metric, OutputAdapter, PluginAdapter, PluginKind, PundunError,
    TableState, WriteReport,
};

pub use factory::{manifest, register, PundunFactory};

/// Registry name of the plugin.
pub const PLUGIN_NAME: &str = "pundun";

/// Text returned by [`OutputAdapter::description`].
pub const DESCRIPTION: &str = "Configuration for Pundun";

/// Text returned by [`OutputAdapter::sample_config`].
pub const SAMPLE_CONFIG: &str = r#"
  ## Location of server in format host:port
  host = "localhost:8887"
  ## Credentials to connect to pundun
  user = "admin"
  password = "admin"
  ## Table to push data to
  database = "telegraf"
"#;

enum State<S> {
    Unconnected,
    Connected { session: S, table_ready: bool },
    Failed { reason: String },
    Closed,
}

/// Pundun output adapter.
///
/// Owns the store session exclusively between `connect` and `close`.
pub struct PundunOutput<C: StoreClient> {
    client: C,
    config: OutputConfig,
    state: State<C::Session>,
}

impl<C: StoreClient> PundunOutput<C> {
    /// Create an unconnected adapter.
    pub fn new(client: C, config: OutputConfig) -> Self {
        Self {
            client,
            config,
            state: State::Unconnected,
        }
    }

    /// The configuration this adapter was built with.
    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Returns true while a session is held.
    pub fn is_connected(&self) -> bool {
        matches!(self.state, State::Connected { .. })
    }

    /// Account for a batch that arrives while no session could be opened.
    ///
    /// Every metric counts as failed and nothing reaches the client.
    fn drop_batch(&self, metrics: &[Metric], reason: &str) -> WriteReport {
        let table = &self.config.database;
        recording::record_batch(metrics.len());
        for metric in metrics {
            recording::record_write("no_session");
            error!(
                %table,
                measurement = %metric.name,
                ts = metric.timestamp,
                %reason,
                "write failed: no session"
            );
        }
        info!(
            count = 0,
            failed = metrics.len(),
            %table,
            host = %self.config.host,
            "wrote 0 measurements to {} @ {}",
            table,
            self.config.host
        );
        WriteReport {
            attempted: metrics.len(),
            written: 0,
            failed: metrics.len(),
        }
    }

    async fn ensure_table(&self, session: &C::Session) -> ConnectStatus {
        let table = &self.config.database;
        let outcome = self
            .client
            .create_table(session, table, &KEY_FIELDS, &TableOptions::default())
            .await;

        match outcome {
            StoreOutcome::Ok => {
                info!(%table, "created table");
                ConnectStatus::Connected {
                    table: TableState::Created,
                }
            }
            StoreOutcome::AlreadyExists => {
                info!(%table, "table already exists");
                ConnectStatus::Connected {
                    table: TableState::Existing,
                }
            }
            StoreOutcome::Failed(failure) => {
                error!(%table, code = %failure.code, message = %failure.message, "error creating table");
                ConnectStatus::Degraded {
                    reason: failure.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl<C: StoreClient> PluginAdapter for PundunOutput<C> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn kind(&self) -> PluginKind {
        PluginKind::Output
    }

    async fn health_check(&self) -> Result<HealthStatus, PundunError> {
        Ok(match &self.state {
            State::Connected {
                table_ready: true, ..
            } => HealthStatus::Healthy,
            State::Connected {
                table_ready: false, ..
            } => HealthStatus::Degraded(format!(
                "table `{}` could not be ensured",
                self.config.database
            )),
            State::Unconnected => HealthStatus::Unhealthy("not connected".to_string()),
            State::Failed { reason } => HealthStatus::Unhealthy(format!(
                "cannot connect to {}: {reason}",
                self.config.host
            )),
            State::Closed => HealthStatus::Unhealthy("closed".to_string()),
        })
    }
}

#[async_trait]
impl<C: StoreClient> OutputAdapter for PundunOutput<C> {
    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn sample_config(&self) -> &str {
        SAMPLE_CONFIG
    }

    async fn connect(&mut self) -> Result<ConnectStatus, PundunError> {
        match std::mem::replace(&mut self.state, State::Unconnected) {
            State::Closed => {
                self.state = State::Closed;
                return Err(PundunError::Closed);
            }
            State::Connected { session, .. } => {
                debug!(host = %self.config.host, "releasing previous session before reconnecting");
                self.client.disconnect(session).await;
            }
            State::Unconnected | State::Failed { .. } => {}
        }

        let OutputConfig {
            host,
            user,
            password,
            ..
        } = &self.config;

        let session = match self.client.connect(host, user, password).await {
            Ok(session) => session,
            Err(err) => {
                error!(%host, %user, error = %err, "can't connect to server");
                let reason = err.to_string();
                self.state = State::Failed {
                    reason: reason.clone(),
                };
                recording::record_connect("failed");
                return Ok(ConnectStatus::Failed { reason });
            }
        };

        let status = self.ensure_table(&session).await;
        recording::record_connect(status.label());
        self.state = State::Connected {
            session,
            table_ready: matches!(status, ConnectStatus::Connected { .. }),
        };
        Ok(status)
    }

    async fn write(&mut self, metrics: &[Metric]) -> Result<WriteReport, PundunError> {
        let session = match &self.state {
            State::Connected { session, .. } => session,
            State::Failed { reason } => return Ok(self.drop_batch(metrics, reason)),
            State::Unconnected | State::Closed => return Err(PundunError::NotConnected),
        };
        let table = &self.config.database;

        recording::record_batch(metrics.len());
        let mut report = WriteReport::default();
        for metric in metrics {
            let key = translate::row_key(metric);
            let columns = translate::columns(metric);

            let outcome = self.client.write(session, table, &key, &columns).await;
            report.attempted += 1;
            recording::record_write(outcome.label());
            match outcome {
                StoreOutcome::Ok => report.written += 1,
                StoreOutcome::AlreadyExists => {
                    warn!(%table, measurement = %key.meas, ts = key.ts, "store reported an existing row as a write failure");
                    report.failed += 1;
                }
                StoreOutcome::Failed(failure) => {
                    error!(
                        %table,
                        measurement = %key.meas,
                        ts = key.ts,
                        code = %failure.code,
                        message = %failure.message,
                        "write failed"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            count = metrics.len(),
            written = report.written,
            failed = report.failed,
            %table,
            host = %self.config.host,
            "wrote {} measurements to {} @ {}",
            metrics.len(),
            table,
            self.config.host
        );
        Ok(report)
    }

    async fn close(&mut self) -> Result<(), PundunError> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Connected { session, .. } => {
                self.client.disconnect(session).await;
                info!(host = %self.config.host, "disconnected");
            }
            _ => debug!("close called without an open session"),
        }
        Ok(())
    }
}
