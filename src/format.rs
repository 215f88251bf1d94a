//! Human-readable formatting of listing values, in the es-MX conventions used on
//! the printed reports.

use chrono::{Datelike, NaiveDate};
use std::borrow::Cow;

/// Format a price as Mexican pesos, e.g. `$13,450,000.00`
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Format a surface area in square metres, dropping a zero fraction: `200 m²`,
/// `120.5 m²`
pub fn format_area(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0} m²")
    } else {
        format!("{value} m²")
    }
}

/// Day/month/year without zero padding, as printed in report footers: `9/3/2026`
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Cut `text` down to at most `budget` characters, marking the cut with `...`.
/// Text within budget, or with no budget, is returned untouched.
pub fn truncate_description(text: &str, budget: Option<usize>) -> Cow<'_, str> {
    let Some(budget) = budget else {
        return Cow::Borrowed(text);
    };
    match text.char_indices().nth(budget) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_are_grouped_in_thousands() {
        assert_eq!(format_price(13_450_000.0), "$13,450,000.00");
        assert_eq!(format_price(999.5), "$999.50");
        assert_eq!(format_price(1000.0), "$1,000.00");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-1234.567), "-$1,234.57");
    }

    #[test]
    fn areas_drop_empty_fractions() {
        assert_eq!(format_area(200.0), "200 m²");
        assert_eq!(format_area(120.5), "120.5 m²");
    }

    #[test]
    fn dates_are_not_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
        assert_eq!(format_date(date), "9/3/2026");
    }

    #[test]
    fn descriptions_within_budget_are_untouched() {
        let text = "a".repeat(200);
        assert!(matches!(
            truncate_description(&text, Some(200)),
            Cow::Borrowed(_)
        ));
        assert_eq!(truncate_description("corta", None), "corta");
    }

    #[test]
    fn descriptions_over_budget_are_cut_with_a_marker() {
        let text = "a".repeat(201);
        let cut = truncate_description(&text, Some(200));
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ñ".repeat(10);
        assert_eq!(truncate_description(&text, Some(4)), "ññññ...");
        assert_eq!(truncate_description(&text, Some(10)), text);
    }
}
