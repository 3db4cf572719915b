/// Utilities for date and time formatting
///
/// Provides consistent date formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a datetime for display, e.g. "Jun 15, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a plain date for display, e.g. "Jun 15, 2024"
pub fn format_day(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        assert_eq!(format_date(&date), "Jun 15, 2024");
    }

    #[test]
    fn test_format_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_day(&date), "Mar 5, 2024");
    }
}
