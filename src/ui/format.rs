//! Display formatting shared by every table.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for absent values.
pub const MISSING: &str = "---";

/// Digits grouped the Indian way: last three, then pairs (`12,34,567`).
pub fn indian_grouping(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount, at most two decimals. Absent or zero reads `₹0`.
pub fn currency(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|value| *value != 0.0 && value.is_finite()) else {
        return "₹0".to_string();
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = indian_grouping(cents / 100);
    let fraction = cents % 100;
    if fraction == 0 {
        format!("{sign}₹{whole}")
    } else {
        let fraction = format!("{fraction:02}");
        format!("{sign}₹{whole}.{}", fraction.trim_end_matches('0'))
    }
}

/// `dd Mon yyyy`, or the placeholder when absent or unparseable.
pub fn date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(stamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Metal balance with three decimals; zero or absent reads `-`.
pub fn balance(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) if value != 0.0 => format!("{value:.3} {unit}"),
        _ => "-".to_string(),
    }
}

pub fn grams(value: Option<f64>) -> String {
    value
        .map(|grams| format!("{grams:.3} g"))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Counts such as totals, grouped the Indian way.
pub fn count(value: u64) -> String {
    indian_grouping(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_like_en_in() {
        assert_eq!(indian_grouping(999), "999");
        assert_eq!(indian_grouping(1_000), "1,000");
        assert_eq!(indian_grouping(123_456), "1,23,456");
        assert_eq!(indian_grouping(12_345_678), "1,23,45,678");
    }

    #[test]
    fn currency_trims_fraction() {
        assert_eq!(currency(None), "₹0");
        assert_eq!(currency(Some(0.0)), "₹0");
        assert_eq!(currency(Some(6_250.0)), "₹6,250");
        assert_eq!(currency(Some(1_234_567.5)), "₹12,34,567.5");
        assert_eq!(currency(Some(99.99)), "₹99.99");
    }

    #[test]
    fn dates_render_day_month_year() {
        assert_eq!(date(Some("2024-03-05T10:20:30Z")), "05 Mar 2024");
        assert_eq!(date(Some("2024-03-05T10:20:30.123456")), "05 Mar 2024");
        assert_eq!(date(Some("2024-12-31")), "31 Dec 2024");
        assert_eq!(date(Some("yesterday")), MISSING);
        assert_eq!(date(None), MISSING);
    }

    #[test]
    fn balances_hide_zero() {
        assert_eq!(balance(Some(0.0), "g"), "-");
        assert_eq!(balance(None, "g"), "-");
        assert_eq!(balance(Some(1.5), "g"), "1.500 g");
    }
}
