//! Usage snapshot model and the status endpoint's wire format.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

/// Data usage at one point in time.
///
/// Timestamps are kept at millisecond precision so a snapshot survives a
/// trip through the cache file unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSnapshot {
    /// When the carrier measured the usage
    pub timestamp: DateTime<Utc>,
    /// Share of the plan used, 0-100
    pub used_percentage: f64,
    /// Bytes used, when the source reports it
    pub used_volume: Option<u64>,
}

impl UsageSnapshot {
    /// Build a snapshot, truncating the timestamp to milliseconds.
    pub fn new(timestamp: DateTime<Utc>, used_percentage: f64, used_volume: Option<u64>) -> Self {
        Self {
            timestamp: truncate_to_millis(timestamp),
            used_percentage,
            used_volume,
        }
    }

    /// Zero usage measured `now`. Used when neither network nor cache has data.
    pub fn empty(now: DateTime<Utc>) -> Self { Self::new(now, 0.0, None) }

    /// Bytes used, 0 when unknown.
    pub fn used_volume_bytes(&self) -> u64 { self.used_volume.unwrap_or(0) }

    /// Time elapsed since the measurement. Negative if the clock is behind.
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta { now - self.timestamp }
}

/// Body of the status endpoint.
///
/// ```json
/// { "usedAt": 1700000000000, "usedPercentage": 42, "usedVolume": 1234567890 }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Epoch milliseconds; absent means "now"
    pub used_at: Option<i64>,
    /// Absent means 0
    pub used_percentage: Option<f64>,
    /// Bytes; absent means 0
    pub used_volume: Option<f64>,
}

impl StatusResponse {
    /// Convert to a snapshot. Every field has a default, so any JSON object
    /// converts.
    pub fn into_snapshot(self, now: DateTime<Utc>) -> UsageSnapshot {
        let timestamp = self.used_at.and_then(DateTime::from_timestamp_millis).unwrap_or(now);
        let used_percentage = self.used_percentage.unwrap_or(0.0);
        let used_volume = Some(self.used_volume.map_or(0, volume_to_bytes));
        UsageSnapshot::new(timestamp, used_percentage, used_volume)
    }
}

/// Convert a JSON number of bytes to `u64`, saturating at both ends.
pub(crate) fn volume_to_bytes(volume: f64) -> u64 {
    if volume.is_nan() {
        0
    } else {
        volume as u64
    }
}

fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp.timestamp_millis()).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn now() -> DateTime<Utc> { DateTime::from_timestamp_millis(1_700_000_000_123).unwrap() }

    #[test]
    fn test_full_response() {
        let body = r#"{"usedAt": 1699990000000, "usedPercentage": 42.5, "usedVolume": 1234567890}"#;
        let response: StatusResponse = serde_json::from_str(body).unwrap();
        let snapshot = response.into_snapshot(now());

        assert_eq!(
            snapshot,
            UsageSnapshot {
                timestamp: DateTime::from_timestamp_millis(1_699_990_000_000).unwrap(),
                used_percentage: 42.5,
                used_volume: Some(1_234_567_890),
            }
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let response: StatusResponse = serde_json::from_str(r#"{"usedPercentage": 7}"#).unwrap();
        let snapshot = response.into_snapshot(now());

        assert_eq!(snapshot.timestamp, now());
        assert_eq!(snapshot.used_volume, Some(0));
    }

    #[test]
    fn test_missing_percentage_defaults_to_zero() {
        let response: StatusResponse = serde_json::from_str(r#"{"usedVolume": 10}"#).unwrap();
        let snapshot = response.into_snapshot(now());

        assert_eq!(snapshot, UsageSnapshot::new(now(), 0.0, Some(10)));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"usedPercentage": 1, "passName": "Unlimited", "initialVolume": 5}"#;
        assert!(serde_json::from_str::<StatusResponse>(body).is_ok());
    }

    #[test]
    fn test_timestamp_truncated_to_millis() {
        let precise = now() + TimeDelta::microseconds(456);
        assert_eq!(UsageSnapshot::new(precise, 0.0, None).timestamp, now());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = UsageSnapshot::empty(now());
        assert_eq!(snapshot.used_percentage, 0.0);
        assert_eq!(snapshot.used_volume_bytes(), 0);
        assert_eq!(snapshot.timestamp, now());
    }

    #[test]
    fn test_volume_to_bytes_saturates() {
        assert_eq!(volume_to_bytes(-5.0), 0);
        assert_eq!(volume_to_bytes(f64::NAN), 0);
        assert_eq!(volume_to_bytes(1e30), u64::MAX);
        assert_eq!(volume_to_bytes(2048.0), 2048);
    }

    #[test]
    fn test_age() {
        let snapshot = UsageSnapshot::empty(now());
        assert_eq!(snapshot.age(now() + TimeDelta::hours(2)), TimeDelta::hours(2));
    }
}
