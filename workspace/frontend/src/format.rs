//! Display-formatting helpers for the dashboard. All functions are total:
//! missing input renders as "N/A" instead of panicking.

pub const NOT_AVAILABLE: &str = "N/A";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Scale a number using the Indian numbering system.
/// 12_345_678 => "1.23 Cr", 234_567 => "2.35 Lakh", 4_560 => "4.56K".
pub fn format_indian_number(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };

    let magnitude = value.abs();
    if magnitude >= CRORE {
        format!("{:.2} Cr", value / CRORE)
    } else if magnitude >= LAKH {
        format!("{:.2} Lakh", value / LAKH)
    } else if magnitude >= THOUSAND {
        format!("{:.2}K", value / THOUSAND)
    } else {
        format!("{value:.0}")
    }
}

/// Format an amount in rupees, scaled the same way as [`format_indian_number`].
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("\u{20b9}{}", format_indian_number(Some(value))),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Render a 1-based month and year as "October 2024".
pub fn format_month_year(year: i32, month: u32) -> String {
    match month_name(month) {
        Some(name) if year != 0 => format!("{name} {year}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Full English name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTHS[(month - 1) as usize])
    } else {
        None
    }
}

/// Format a percentage with the given number of decimal places.
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{value:.decimals$}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Percentage change from `previous` to `current`. A missing or zero
/// baseline yields `None` instead of dividing by zero.
pub fn percent_change(current: f64, previous: Option<f64>) -> Option<f64> {
    match previous {
        Some(previous) if previous != 0.0 => Some((current - previous) / previous * 100.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crore_scaling() {
        assert_eq!(format_indian_number(Some(10_000_000.0)), "1.00 Cr");
        assert_eq!(format_indian_number(Some(12_345_678.0)), "1.23 Cr");
        assert_eq!(format_indian_number(Some(250_000_000.0)), "25.00 Cr");
    }

    #[test]
    fn test_lakh_scaling() {
        assert_eq!(format_indian_number(Some(100_000.0)), "1.00 Lakh");
        assert_eq!(format_indian_number(Some(1_234_567.0)), "12.35 Lakh");
        assert_eq!(format_indian_number(Some(9_999_999.0)), "100.00 Lakh");
    }

    #[test]
    fn test_thousand_scaling() {
        assert_eq!(format_indian_number(Some(1_000.0)), "1.00K");
        assert_eq!(format_indian_number(Some(45_678.0)), "45.68K");
    }

    #[test]
    fn test_small_numbers_unscaled() {
        assert_eq!(format_indian_number(Some(0.0)), "0");
        assert_eq!(format_indian_number(Some(999.0)), "999");
    }

    #[test]
    fn test_negative_numbers_scale_by_magnitude() {
        assert_eq!(format_indian_number(Some(-1_234_567.0)), "-12.35 Lakh");
        assert_eq!(format_indian_number(Some(-4_500.0)), "-4.50K");
    }

    #[test]
    fn test_missing_number_is_not_available() {
        assert_eq!(format_indian_number(None), "N/A");
        assert_eq!(format_currency(None), "N/A");
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(format_currency(Some(1_234_567.0)), "\u{20b9}12.35 Lakh");
        assert_eq!(format_currency(Some(500.0)), "\u{20b9}500");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(format_month_year(2024, 10), "October 2024");
        assert_eq!(format_month_year(2023, 1), "January 2023");
    }

    #[test]
    fn test_month_year_invalid_inputs() {
        assert_eq!(format_month_year(0, 10), "N/A");
        assert_eq!(format_month_year(2024, 0), "N/A");
        assert_eq!(format_month_year(2024, 13), "N/A");
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(150.0, Some(100.0)), Some(50.0));
        assert_eq!(percent_change(75.0, Some(100.0)), Some(-25.0));
    }

    #[test]
    fn test_percent_change_missing_baseline() {
        assert_eq!(percent_change(42.0, Some(0.0)), None);
        assert_eq!(percent_change(42.0, None), None);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(12.345), 2), "12.35%");
        assert_eq!(format_percentage(Some(-3.0), 1), "-3.0%");
        assert_eq!(format_percentage(None, 2), "N/A");
    }
}
