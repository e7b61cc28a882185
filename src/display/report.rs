//! Formatting helpers shared by the list views

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{Money, STORED_DATE_FORMAT};

/// Amount with an explicit `+`/`-` sign and the currency symbol
pub fn format_signed(sign: char, amount: Money, symbol: &str) -> String {
    format!("{}{}", sign, amount.format_with_symbol(symbol))
}

/// Render `date` with a user-supplied strftime format
///
/// An invalid format falls back to `YYYY-MM-DD` instead of failing.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(STORED_DATE_FORMAT).to_string();
    }
    out
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple usage bar, capped at full
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed('+', Money::from_cents(1050), "$"), "+$10.50");
        assert_eq!(format_signed('-', Money::from_cents(5), "€"), "-€0.05");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "01/06/2024");
        assert_eq!(format_date(date, "%Q"), "2024-06-01");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.55), "5.5%");
        assert_eq!(format_percentage(133.333), "133.3%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(250.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 2), "░░");
        assert_eq!(format_bar(10.0, 0.0, 2), "░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 10), "a long ...");
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("ünïcödé text", 6), "ünï...");
    }
}
