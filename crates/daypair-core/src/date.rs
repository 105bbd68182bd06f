//! Date navigation helpers for the day view.
//!
//! All helpers take their reference point explicitly; none read the clock.

use chrono::{Duration, NaiveDate};

/// Returns `date` shifted by `days` (negative for previous days).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Whether `date` is the caller-supplied `today`.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Formats a date for the navigator header, e.g. `"Wed, Mar 12, 2025"`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// ISO date string, e.g. `"2025-03-12"`.
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_days_forward_and_back() {
        assert_eq!(add_days(date(2025, 3, 12), 1), date(2025, 3, 13));
        assert_eq!(add_days(date(2025, 3, 12), -1), date(2025, 3, 11));
        // Month boundary
        assert_eq!(add_days(date(2025, 3, 31), 1), date(2025, 4, 1));
    }

    #[test]
    fn today_detection() {
        let today = date(2025, 3, 12);
        assert!(is_today(today, today));
        assert!(!is_today(add_days(today, 1), today));
    }

    #[test]
    fn display_date() {
        assert_eq!(format_display_date(date(2025, 3, 12)), "Wed, Mar 12, 2025");
        // Single-digit days have no leading zero.
        assert_eq!(format_display_date(date(2025, 3, 5)), "Wed, Mar 5, 2025");
    }

    #[test]
    fn iso_string() {
        assert_eq!(date_string(date(2025, 3, 5)), "2025-03-05");
    }
}
