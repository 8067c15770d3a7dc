// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric to row translation.

use pundun_core::{Columns, FieldValue, Metric, RowKey};
use tracing::debug;

/// Build the `{ts, meas}` key for a metric.
pub fn row_key(metric: &Metric) -> RowKey {
    RowKey {
        ts: metric.timestamp,
        meas: metric.name.clone(),
    }
}

/// Flatten a metric's fields and tags into one column set.
///
/// Fields go in first and tags second, so a tag always replaces a field
/// that has the same key.
pub fn columns(metric: &Metric) -> Columns {
    let mut columns = metric.fields.clone();
    for (key, value) in &metric.tags {
        if let Some(replaced) = columns.insert(key.clone(), FieldValue::String(value.clone())) {
            debug!(
                measurement = %metric.name,
                column = %key,
                %replaced,
                "tag overrides field with the same key"
            );
        }
    }
    columns
}
