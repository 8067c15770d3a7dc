// SPDX-FileCopyrightText: 2026 Pundun Adapter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tagged results for table creation and row writes.
//!
//! The store answers every request with either an `ok` sentinel or a map of
//! error descriptions keyed by subsystem. Clients translate that response
//! into a [`StoreOutcome`] so callers match on variants instead of
//! comparing against magic values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error term the store reports under the `system` key for a duplicate table.
pub const TABLE_EXISTS_TERM: &str = "{error,\"table_exists\"}";

/// A rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFailure {
    /// Subsystem or result code reported by the store.
    pub code: String,
    /// Error description.
    pub message: String,
}

impl fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Result of a store request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreOutcome {
    /// The request succeeded.
    Ok,
    /// The table to be created already exists.
    AlreadyExists,
    /// Any other failure.
    Failed(StoreFailure),
}

impl StoreOutcome {
    /// Shorthand for a [`StoreOutcome::Failed`].
    pub fn failed(code: impl Into<String>, message: impl Into<String>) -> Self {
        StoreOutcome::Failed(StoreFailure {
            code: code.into(),
            message: message.into(),
        })
    }

    /// Translate a store error map into a tagged outcome.
    ///
    /// [`StoreClient`](crate::StoreClient) implementations call this on every
    /// non-`ok` response so the adapter never inspects raw error terms.
    ///
    /// A `system` entry carrying the table-exists term becomes
    /// [`StoreOutcome::AlreadyExists`]. Otherwise the `system` entry is
    /// preferred as the failure, falling back to the first entry by key.
    pub fn from_error_map(errors: &BTreeMap<String, String>) -> Self {
        if let Some(system) = errors.get("system") {
            if system == TABLE_EXISTS_TERM {
                return StoreOutcome::AlreadyExists;
            }
            return StoreOutcome::failed("system", system.clone());
        }
        match errors.iter().next() {
            Some((code, message)) => StoreOutcome::failed(code.clone(), message.clone()),
            None => StoreOutcome::failed("unknown", "empty error response"),
        }
    }

    /// Returns true for [`StoreOutcome::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, StoreOutcome::Ok)
    }

    /// Short label used for logs and metric labels.
    pub fn label(&self) -> &'static str {
        match self {
            StoreOutcome::Ok => "ok",
            StoreOutcome::AlreadyExists => "already_exists",
            StoreOutcome::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn table_exists_term_maps_to_already_exists() {
        let outcome = StoreOutcome::from_error_map(&errors(&[("system", TABLE_EXISTS_TERM)]));
        assert_eq!(outcome, StoreOutcome::AlreadyExists);
    }

    #[test]
    fn other_system_error_is_failure() {
        let outcome =
            StoreOutcome::from_error_map(&errors(&[("system", "{error,no_such_table}")]));
        assert_eq!(
            outcome,
            StoreOutcome::failed("system", "{error,no_such_table}")
        );
    }

    #[test]
    fn system_entry_is_preferred_over_others() {
        let outcome = StoreOutcome::from_error_map(&errors(&[
            ("protocol", "bad frame"),
            ("system", "{error,disk_full}"),
        ]));
        assert_eq!(outcome, StoreOutcome::failed("system", "{error,disk_full}"));
    }

    #[test]
    fn non_system_error_uses_first_key() {
        let outcome = StoreOutcome::from_error_map(&errors(&[
            ("transaction", "aborted"),
            ("protocol", "bad frame"),
        ]));
        assert_eq!(outcome, StoreOutcome::failed("protocol", "bad frame"));
    }

    #[test]
    fn empty_map_is_unknown_failure() {
        let outcome = StoreOutcome::from_error_map(&BTreeMap::new());
        assert!(matches!(outcome, StoreOutcome::Failed(ref f) if f.code == "unknown"));
        assert!(!outcome.is_ok());
    }

    #[test]
    fn labels_and_display() {
        assert_eq!(StoreOutcome::Ok.label(), "ok");
        assert_eq!(StoreOutcome::AlreadyExists.label(), "already_exists");
        let failed = StoreOutcome::failed("system", "boom");
        assert_eq!(failed.label(), "failed");
        if let StoreOutcome::Failed(f) = failed {
            assert_eq!(f.to_string(), "system: boom");
        }
    }
}
