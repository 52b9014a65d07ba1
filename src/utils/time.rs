//! Timestamp helpers shared by the log, the store and the session adapter.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// RFC 3339 in UTC with second precision (`2025-03-01T09:30:00Z`).
///
/// Fixed width and a fixed offset, so stored values compare correctly as text.
pub fn utc_stamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn now_stamp() -> String {
    utc_stamp(Utc::now())
}

/// Stamp `hours` from now.
pub fn stamp_in_hours(hours: i64) -> String {
    utc_stamp(Utc::now() + Duration::hours(hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stamp_is_utc_with_z_suffix() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(utc_stamp(dt), "2025-03-01T09:30:00Z");
    }

    #[test]
    fn later_stamps_sort_after_earlier_ones() {
        assert!(stamp_in_hours(1) > now_stamp());
        assert!(stamp_in_hours(-1) < now_stamp());
    }
}
