//! Date/time helpers for values typed into `datetime-local` inputs and
//! stored as plain strings.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored or typed date-time.
///
/// Accepts local forms with or without seconds, RFC 3339 values with an
/// offset, and a bare date (taken as midnight).
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    parse_date(value).map(|d| d.and_time(NaiveTime::MIN))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(STORAGE_FORMAT).to_string()
}

pub fn format_input(value: &NaiveDateTime) -> String {
    value.format(INPUT_FORMAT).to_string()
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Human readable "09 Aug 2025, 14:30".
pub fn display_datetime(value: &NaiveDateTime) -> String {
    value.format("%d %b %Y, %H:%M").to_string()
}

pub fn display_time(value: &NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59 of the given day, the inclusive upper bound of a date filter.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::seconds(86_399)
}

/// Clamped to the latest representable time instead of overflowing.
pub fn add_minutes(value: NaiveDateTime, minutes: u32) -> NaiveDateTime {
    value
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Serde adapter storing `NaiveDateTime` as `YYYY-MM-DDTHH:MM:SS` while
/// reading every form `parse_datetime` understands.
pub mod flexible {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_datetime(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).ok_or_else(|| de::Error::custom(format!("invalid date-time '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, STORAGE_FORMAT).unwrap()
    }

    #[test]
    fn test_parse_accepts_input_and_storage_forms() {
        assert_eq!(parse_datetime("2025-08-09T09:00"), Some(dt("2025-08-09T09:00:00")));
        assert_eq!(parse_datetime("2025-08-09T09:00:30"), Some(dt("2025-08-09T09:00:30")));
        assert_eq!(parse_datetime("2025-08-09T09:00:00.000Z"), Some(dt("2025-08-09T09:00:00")));
        assert_eq!(parse_datetime("2025-08-09"), Some(dt("2025-08-09T00:00:00")));
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("tomorrow"), None);
    }

    #[test]
    fn test_day_bounds() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 9).unwrap();
        assert_eq!(start_of_day(d), dt("2025-08-09T00:00:00"));
        assert_eq!(end_of_day(d), dt("2025-08-09T23:59:59"));
    }

    #[test]
    fn test_add_minutes_crosses_midnight() {
        assert_eq!(add_minutes(dt("2025-08-09T23:30:00"), 45), dt("2025-08-10T00:15:00"));
    }

    #[test]
    fn test_add_minutes_saturates_at_max() {
        let late = NaiveDateTime::MAX - Duration::minutes(10);
        assert_eq!(add_minutes(late, u32::MAX), NaiveDateTime::MAX);
    }
}
