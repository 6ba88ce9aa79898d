use chrono::{Datelike, NaiveDate};

/// Render a year/month pair as the `YYYY-MM` form the backend's query
/// parameters use.
pub fn format_period(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Translate a relative month count into the absolute inclusive `(from, to)`
/// range the history endpoint expects, anchored at the anchor date's calendar
/// month. A window of `n` months covers the anchor month plus the `n - 1`
/// months before it, so 12 months ending March 2024 starts at April 2023.
pub fn history_window(anchor: NaiveDate, months: u32) -> (String, String) {
    let months = months.max(1);
    let end = anchor.year() * 12 + anchor.month0() as i32;
    let start = end - (months as i32 - 1);
    let from_year = start.div_euclid(12);
    let from_month = start.rem_euclid(12) as u32 + 1;
    tracing::trace!(months, from_year, from_month, "resolved history window");
    (
        format_period(from_year, from_month),
        format_period(anchor.year(), anchor.month()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_twelve_months_ending_march() {
        assert_eq!(
            history_window(day(2024, 3, 15), 12),
            ("2023-04".to_string(), "2024-03".to_string())
        );
    }

    #[test]
    fn test_single_month_window_is_current_month() {
        assert_eq!(
            history_window(day(2024, 10, 1), 1),
            ("2024-10".to_string(), "2024-10".to_string())
        );
    }

    #[test]
    fn test_window_crossing_multiple_years() {
        assert_eq!(
            history_window(day(2025, 1, 31), 36),
            ("2022-02".to_string(), "2025-01".to_string())
        );
    }

    #[test]
    fn test_six_months_within_one_year() {
        assert_eq!(
            history_window(day(2024, 9, 5), 6),
            ("2024-04".to_string(), "2024-09".to_string())
        );
    }

    #[test]
    fn test_zero_months_clamps_to_one() {
        assert_eq!(
            history_window(day(2024, 5, 1), 0),
            ("2024-05".to_string(), "2024-05".to_string())
        );
    }

    #[test]
    fn test_format_period_pads() {
        assert_eq!(format_period(2024, 3), "2024-03");
        assert_eq!(format_period(2024, 12), "2024-12");
    }
}
