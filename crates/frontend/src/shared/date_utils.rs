//! Browser clock and display helpers for dates.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now().date()
}

/// `createdDate` value for records made now.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// "2024-03-15T14:02:26" -> "15 Mar 2024, 14:02"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d %b %Y, %H:%M").to_string()
}

/// "2024-03-15" -> "Friday, 15 March 2024"
pub fn format_long_date(date: &NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Stored date string shown as-is when it is not a plain `YYYY-MM-DD`.
pub fn format_date_str(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        let value = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(format_datetime(&value), "15 Mar 2024, 14:02");
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_long_date(&date), "Friday, 15 March 2024");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date_str("2024-03-15T14:02:26"), "15 Mar 2024");
        assert_eq!(format_date_str("invalid"), "invalid");
    }
}
