// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the plugin contract, the store client, and the adapter.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of plugin in the host registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum PluginKind {
    Input,
    Output,
    Processor,
    Aggregator,
}

/// A typed metric field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}i"),
            FieldValue::Unsigned(v) => write!(f, "{v}u"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Boolean(v) => write!(f, "{v}"),
            FieldValue::String(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Unsigned(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

/// A named, timestamped measurement handed to output plugins by the host.
///
/// Output plugins only read metrics; the host owns their construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Measurement name (e.g. "cpu").
    pub name: String,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
    /// Dimension key/value pairs.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Measured values.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Metric {
    /// Create a metric stamped with the current wall-clock time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::with_timestamp(name, now)
    }

    /// Create a metric with an explicit nanosecond timestamp.
    pub fn with_timestamp(name: impl Into<String>, timestamp: i64) -> Self {
        Self {
            name: name.into(),
            timestamp,
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a tag, replacing any previous value for the same key.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add a field, replacing any previous value for the same key.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Primary key of a row in the destination table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    /// Nanosecond timestamp.
    pub ts: i64,
    /// Measurement name.
    pub meas: String,
}

/// Column set written alongside a [`RowKey`].
pub type Columns = BTreeMap<String, FieldValue>;

/// State of the destination table after a connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TableState {
    /// The table was created by this connect.
    Created,
    /// The table already existed.
    Existing,
}

/// Outcome of [`OutputAdapter::connect`](crate::traits::OutputAdapter::connect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectStatus {
    /// A session is held and the destination table is known to exist.
    Connected { table: TableState },
    /// A session is held but the destination table could not be ensured.
    Degraded { reason: String },
    /// No session could be opened.
    Failed { reason: String },
}

impl ConnectStatus {
    /// Short label used for logs and metric labels.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectStatus::Connected { .. } => "connected",
            ConnectStatus::Degraded { .. } => "degraded",
            ConnectStatus::Failed { .. } => "failed",
        }
    }
}

/// Summary of a [`OutputAdapter::write`](crate::traits::OutputAdapter::write) call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Number of metrics the adapter tried to deliver.
    pub attempted: usize,
    /// Number of writes the store acknowledged.
    pub written: usize,
    /// Number of writes the store rejected.
    pub failed: usize,
}

impl WriteReport {
    /// Returns true if every attempted write was acknowledged.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}
