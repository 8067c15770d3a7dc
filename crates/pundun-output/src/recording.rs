// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.
//!
//! Uses the metrics-rs facade so whichever recorder the host installs
//! (Prometheus, statsd, etc.) can collect these metrics. Without a
//! recorder every call is a no-op.

use metrics::{describe_counter, describe_histogram};

/// Register descriptions for the adapter's own metrics.
///
/// Called by [`register`](crate::register) once the host has installed its
/// recorder.
pub fn register_metrics() {
    describe_counter!(
        "pundun_connects_total",
        "Connect attempts by resulting status"
    );
    describe_counter!(
        "pundun_writes_total",
        "Row writes issued to the store by outcome"
    );
    describe_histogram!("pundun_batch_size", "Metrics per write batch");
}

/// Record a connect attempt.
pub fn record_connect(status: &'static str) {
    metrics::counter!("pundun_connects_total", "status" => status).increment(1);
}

/// Record a single row write.
pub fn record_write(outcome: &'static str) {
    metrics::counter!("pundun_writes_total", "outcome" => outcome).increment(1);
}

/// Record the size of a write batch.
pub fn record_batch(size: usize) {
    metrics::histogram!("pundun_batch_size").record(size as f64);
}
