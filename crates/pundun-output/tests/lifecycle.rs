// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end lifecycle tests driving the adapter the way a host does.

use pundun_config::OutputConfig;
use pundun_core::{
    ConnectStatus, FieldValue, Metric, OutputAdapter, PluginKind, RowKey, TableState,
};
use pundun_output::{register, PundunOutput};
use pundun_plugin::PluginRegistry;
use pundun_test_utils::{MockStoreClient, StoreCall};

fn batch(names: &[&str]) -> Vec<Metric> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Metric::with_timestamp(*name, 1_000 + i as i64)
                .field("value", i as f64)
                .tag("host", "box1")
        })
        .collect()
}

/// Host drives connect -> write* -> close on an adapter from the registry.
#[tokio::test]
async fn host_lifecycle_through_registry() {
    let client = MockStoreClient::new();
    let mut registry = PluginRegistry::new();
    register(&mut registry, client.clone());

    let outputs = registry.get_enabled(PluginKind::Output);
    assert_eq!(outputs.len(), 1);

    let mut output = registry
        .create_output("pundun", &serde_json::json!({ "database": "telemetry" }))
        .unwrap();

    let status = output.connect().await.unwrap();
    assert_eq!(
        status,
        ConnectStatus::Connected {
            table: TableState::Created
        }
    );

    for names in [&["cpu", "mem"][..], &["disk"][..]] {
        let report = output.write(&batch(names)).await.unwrap();
        assert_eq!(report.attempted, names.len());
        assert!(report.is_complete());
    }
    output.close().await.unwrap();

    let rows = client.rows().await;
    let meas: Vec<&str> = rows.iter().map(|r| r.key.meas.as_str()).collect();
    assert_eq!(meas, vec!["cpu", "mem", "disk"]);
    assert!(rows.iter().all(|r| r.table == "telemetry"));
    assert_eq!(client.open_sessions().await, 0);
}

/// Every write in a session uses the session handle returned by connect.
#[tokio::test]
async fn all_writes_use_the_connected_session() {
    let client = MockStoreClient::new();
    let mut output = PundunOutput::new(client.clone(), OutputConfig::default());
    output.connect().await.unwrap();
    output.write(&batch(&["a", "b", "c"])).await.unwrap();
    output.write(&batch(&["d"])).await.unwrap();

    let calls = client.calls().await;
    let connected_session = calls
        .iter()
        .find_map(|c| match c {
            StoreCall::CreateTable { session, .. } => Some(*session),
            _ => None,
        })
        .expect("create_table should be called");
    let write_sessions: Vec<u64> = calls
        .iter()
        .filter_map(|c| match c {
            StoreCall::Write { session, .. } => Some(*session),
            _ => None,
        })
        .collect();
    assert_eq!(write_sessions.len(), 4);
    assert!(write_sessions.iter().all(|s| *s == connected_session));
}

/// Two adapters connecting against the same store both succeed.
#[tokio::test]
async fn connecting_twice_against_existing_table_is_silent() {
    let client = MockStoreClient::new();

    let mut first = PundunOutput::new(client.clone(), OutputConfig::default());
    let mut second = PundunOutput::new(client.clone(), OutputConfig::default());

    assert!(first.connect().await.is_ok());
    let status = second.connect().await.expect("second connect must not fail");
    assert_eq!(
        status,
        ConnectStatus::Connected {
            table: TableState::Existing
        }
    );
}

/// A batch with one rejected metric still attempts every metric.
#[tokio::test]
async fn partial_failure_attempts_whole_batch() {
    let client = MockStoreClient::new().rejecting_measurement("mem");
    let mut output = PundunOutput::new(client.clone(), OutputConfig::default());
    output.connect().await.unwrap();

    let report = output
        .write(&batch(&["cpu", "mem", "disk", "mem", "net"]))
        .await
        .unwrap();
    assert_eq!(report.attempted, 5);
    assert_eq!(report.written, 3);
    assert_eq!(report.failed, 2);

    let attempted: Vec<RowKey> = client
        .write_calls()
        .await
        .into_iter()
        .filter_map(|c| match c {
            StoreCall::Write { key, .. } => Some(key),
            _ => None,
        })
        .collect();
    let meas: Vec<&str> = attempted.iter().map(|k| k.meas.as_str()).collect();
    assert_eq!(meas, vec!["cpu", "mem", "disk", "mem", "net"]);
}

/// Key and columns sent to the store follow the fixed translation.
#[tokio::test]
async fn row_shape_matches_translation_rules() {
    let client = MockStoreClient::new();
    let mut output = PundunOutput::new(client.clone(), OutputConfig::default());
    output.connect().await.unwrap();

    let metric = Metric::with_timestamp("cpu", 1_700_000_000_000_000_000)
        .field("usage_idle", 42.0)
        .field("region", 1i64)
        .tag("host", "box1")
        .tag("region", "eu-west");
    output.write(&[metric]).await.unwrap();

    let rows = client.rows().await;
    assert_eq!(
        rows[0].key,
        RowKey {
            ts: 1_700_000_000_000_000_000,
            meas: "cpu".to_string()
        }
    );
    let columns = &rows[0].columns;
    assert_eq!(columns.len(), 3);
    assert_eq!(columns.get("usage_idle"), Some(&FieldValue::Float(42.0)));
    assert_eq!(
        columns.get("host"),
        Some(&FieldValue::String("box1".to_string()))
    );
    assert_eq!(
        columns.get("region"),
        Some(&FieldValue::String("eu-west".to_string()))
    );
}

/// A store that refuses sessions never makes connect or write fail.
#[tokio::test]
async fn unreachable_store_keeps_host_running() {
    let client = MockStoreClient::new().refusing_connections("no route to host");
    let mut output = PundunOutput::new(client.clone(), OutputConfig::default());

    let status = output.connect().await.unwrap();
    assert!(matches!(status, ConnectStatus::Failed { ref reason } if reason.contains("no route")));

    let report = output.write(&batch(&["cpu", "mem"])).await.unwrap();
    assert_eq!(report.attempted, 2);
    assert_eq!(report.failed, 2);
    assert!(!report.is_complete());
    assert!(output.close().await.is_ok());
    assert!(client.write_calls().await.is_empty());
}
