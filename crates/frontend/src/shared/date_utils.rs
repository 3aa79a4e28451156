/// Utilities for date formatting
///
/// Dates travel as ISO-8601 and are displayed in day-month-year form.
use chrono::NaiveDate;

/// Format an ISO date string to DD-MM-YYYY
/// Example: "2025-08-02" or "2025-08-02T10:25:50.298Z" -> "02-08-2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}-{}-{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a parsed calendar date to DD-MM-YYYY
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Today's date in the ISO form used by `<input type="date">`
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-08-02"), "02-08-2025");
        assert_eq!(format_date("2025-08-02T10:25:50.298Z"), "02-08-2025");
    }

    #[test]
    fn test_format_naive_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
        assert_eq!(format_naive_date(date), "02-08-2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
