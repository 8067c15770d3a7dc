// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table creation options submitted once per connect.

use serde::{Deserialize, Serialize};

/// Key schema of the destination table: nanosecond timestamp, then measurement name.
pub const KEY_FIELDS: [&str; 2] = ["ts", "meas"];

/// Storage engine backing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableType {
    Leveldb,
    LeveldbWrapped,
    LeveldbTda,
    LeveldbWrappedTda,
    Rocksdb,
}

/// Row ordering within a shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Ascending,
    Descending,
}

/// Server-side column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataModel {
    Kv,
    Array,
    Map,
}

/// Unit of a [`TimeMargin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

/// Resolution of the timestamp key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

/// Width of one time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMargin {
    pub unit: TimeUnit,
    pub value: u32,
}

/// Time-divided archival parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tda {
    pub num_of_buckets: u32,
    pub time_margin: TimeMargin,
    pub ts_field: String,
    pub precision: Precision,
}

/// Options bundle passed to `create_table`.
///
/// [`Default`] yields the fixed bundle used by the output adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub tda: Tda,
    pub data_model: DataModel,
    pub comparator: Comparator,
    pub time_series: bool,
    pub shards: u32,
    pub distributed: bool,
    pub replication_factor: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            table_type: TableType::LeveldbTda,
            tda: Tda {
                num_of_buckets: 10,
                time_margin: TimeMargin {
                    unit: TimeUnit::Minutes,
                    value: 10,
                },
                ts_field: KEY_FIELDS[0].to_string(),
                precision: Precision::Nanosecond,
            },
            data_model: DataModel::Array,
            comparator: Comparator::Descending,
            time_series: false,
            shards: 8,
            distributed: true,
            replication_factor: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_matches_fixed_schema() {
        let options = TableOptions::default();
        assert_eq!(options.table_type, TableType::LeveldbTda);
        assert_eq!(options.tda.num_of_buckets, 10);
        assert_eq!(options.tda.time_margin.unit, TimeUnit::Minutes);
        assert_eq!(options.tda.time_margin.value, 10);
        assert_eq!(options.tda.ts_field, "ts");
        assert_eq!(options.tda.precision, Precision::Nanosecond);
        assert_eq!(options.data_model, DataModel::Array);
        assert_eq!(options.comparator, Comparator::Descending);
        assert!(!options.time_series);
        assert_eq!(options.shards, 8);
        assert!(options.distributed);
        assert_eq!(options.replication_factor, 1);
    }

    #[test]
    fn options_serialize_with_store_keys() {
        let value = serde_json::to_value(TableOptions::default()).unwrap();
        assert_eq!(value["type"], "leveldb_tda");
        assert_eq!(value["tda"]["time_margin"]["unit"], "minutes");
        assert_eq!(value["tda"]["precision"], "nanosecond");
        assert_eq!(value["comparator"], "descending");
        assert_eq!(value["data_model"], "array");
        assert_eq!(value["replication_factor"], 1);
    }

    #[test]
    fn key_fields_are_timestamp_then_name() {
        assert_eq!(KEY_FIELDS, ["ts", "meas"]);
    }
}
