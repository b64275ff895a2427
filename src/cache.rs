//! Single-file JSON cache of the last live snapshot.
//!
//! File format:
//!
//! ```json
//! { "timestamp": 1700000000000, "usedPercentage": 42.5, "usedVolume": 1234567890 }
//! ```
//!
//! `timestamp` is epoch milliseconds and `usedVolume` is omitted when unknown.
//! Reading is defensive: each field is taken if it is a number and defaulted
//! otherwise, so a partly damaged file still yields a snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::CacheError;
use crate::snapshot::{UsageSnapshot, volume_to_bytes};

/// On-disk record, written verbatim from a live snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CacheRecord {
    timestamp: i64,
    used_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    used_volume: Option<u64>,
}

impl From<&UsageSnapshot> for CacheRecord {
    fn from(snapshot: &UsageSnapshot) -> Self {
        Self {
            timestamp: snapshot.timestamp.timestamp_millis(),
            used_percentage: snapshot.used_percentage,
            used_volume: snapshot.used_volume,
        }
    }
}

/// Handle to the cache file. No locking: one widget run at a time.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    /// Load the cached snapshot.
    ///
    /// Missing `timestamp` becomes `now`, missing `usedPercentage` becomes 0
    /// and missing `usedVolume` stays unknown.
    pub fn read(&self, now: DateTime<Utc>) -> Result<UsageSnapshot, CacheError> {
        let text = fs::read_to_string(&self.path).map_err(|source| CacheError::Io {
            path: self.path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text)?;
        let record = value.as_object().ok_or(CacheError::NotAnObject)?;

        let timestamp = record
            .get("timestamp")
            .and_then(Value::as_i64)
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or(now);
        let used_percentage = record.get("usedPercentage").and_then(Value::as_f64).unwrap_or(0.0);
        let used_volume = record.get("usedVolume").and_then(Value::as_f64).map(volume_to_bytes);

        Ok(UsageSnapshot::new(timestamp, used_percentage, used_volume))
    }

    /// Overwrite the cache with `snapshot`, creating the directory if needed.
    pub fn write(&self, snapshot: &UsageSnapshot) -> Result<(), CacheError> {
        let io_err = |source| CacheError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string(&CacheRecord::from(snapshot))?;
        fs::write(&self.path, json).map_err(io_err)?;
        debug!("Cache written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn now() -> DateTime<Utc> { DateTime::from_timestamp_millis(1_700_000_000_000).unwrap() }

    fn store(dir: &TempDir) -> CacheStore { CacheStore::new(dir.path().join("mobile-data-usage.json")) }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let snapshot = UsageSnapshot::new(now(), 63.25, Some(3_221_225_472));

        store.write(&snapshot).unwrap();
        assert_eq!(store.read(now() + chrono::TimeDelta::hours(5)).unwrap(), snapshot);
    }

    #[test]
    fn test_written_fields_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.write(&UsageSnapshot::new(now(), 10.0, Some(42))).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "timestamp": 1_700_000_000_000i64,
                "usedPercentage": 10.0,
                "usedVolume": 42,
            })
        );
    }

    #[test]
    fn test_unknown_volume_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.write(&UsageSnapshot::new(now(), 10.0, None)).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(!text.contains("usedVolume"));
        assert_eq!(store.read(now()).unwrap().used_volume, None);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("nested").join("cache.json"));
        store.write(&UsageSnapshot::empty(now())).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.write(&UsageSnapshot::new(now(), 10.0, Some(1))).unwrap();
        store.write(&UsageSnapshot::new(now(), 20.0, Some(2))).unwrap();

        let snapshot = store.read(now()).unwrap();
        assert_eq!(snapshot.used_percentage, 20.0);
        assert_eq!(snapshot.used_volume, Some(2));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(store(&dir).read(now()), Err(CacheError::Io { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.read(now()), Err(CacheError::Json(_))));

        fs::write(store.path(), "[1, 2, 3]").unwrap();
        assert!(matches!(store.read(now()), Err(CacheError::NotAnObject)));
    }

    #[test]
    fn test_fields_defaulted_one_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        fs::write(store.path(), r#"{"timestamp": "yesterday", "usedVolume": 2048}"#).unwrap();

        let snapshot = store.read(now()).unwrap();
        assert_eq!(snapshot, UsageSnapshot::new(now(), 0.0, Some(2048)));
    }
}
