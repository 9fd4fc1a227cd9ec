//! Small shared pieces: spinner, error banner, display formatting.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            "Error: {message}"
        }
    }
}

/// "N/A" for fields the server omitted.
pub fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Dollar amount with thousands separators: `1234567.5` -> `$1,234,567.50`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// "Jan 5, 2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jan 5, 2024 3:04 PM"
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Close dates are optional; absent renders as a dash.
pub fn format_optional_date(date: &Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => format_date(date),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("Software"), "Software");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(950.5), "$950.50");
        assert_eq!(format_amount(125000.0), "$125,000.00");
        assert_eq!(format_amount(1234567.891), "$1,234,567.89");
        assert_eq!(format_amount(-42.0), "-$42.00");
    }

    #[test]
    fn test_format_dates() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 15, 4, 0).unwrap();
        assert_eq!(format_date(&date), "Jan 5, 2024");
        assert_eq!(format_datetime(&date), "Jan 5, 2024 3:04 PM");
        assert_eq!(format_optional_date(&None), "—");
        assert_eq!(format_optional_date(&Some(date)), "Jan 5, 2024");
    }
}
