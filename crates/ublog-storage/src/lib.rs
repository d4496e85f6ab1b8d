//! # ublog-storage
//!
//! SQLite persistence for the ordered post collection: single write
//! connection plus a read pool (WAL), versioned migrations, and the
//! snapshot page read that pagination depends on.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use chrono::{DateTime, Utc};

use ublog_core::errors::{StorageError, UblogError};

/// Wrap a low-level failure message as a storage fault.
pub(crate) fn to_storage_err(message: String) -> UblogError {
    StorageError::SqliteError { message }.into()
}

/// Timestamp column format: fixed three fractional digits so TEXT
/// comparison in SQL matches chronological order at millisecond
/// resolution.
pub(crate) fn to_sortable_ts(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parse a timestamp column written by [`to_sortable_ts`].
pub(crate) fn parse_ts(raw: &str) -> Result<DateTime<Utc>, UblogError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp column {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn sortable_ts_is_fixed_width() {
        let a = Utc.timestamp_millis_opt(1_700_000_000_005).unwrap();
        let b = Utc.timestamp_millis_opt(1_700_000_000_050).unwrap();
        let (sa, sb) = (to_sortable_ts(&a), to_sortable_ts(&b));
        assert_eq!(sa.len(), sb.len());
        assert!(sa < sb);
    }

    #[test]
    fn sortable_ts_round_trips() {
        let ts = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        assert_eq!(parse_ts(&to_sortable_ts(&ts)).unwrap(), ts);
    }
}
