//! Display formatting for money and dates.
//!
//! These helpers never fail: malformed input produces an empty or placeholder
//! string because the values were already validated upstream and only feed
//! the presentation layer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// `$1234.50` style, two fixed decimals and no grouping.
pub fn dollars(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}${}", fixed_two(amount))
}

/// `$1,234.50` style, two fixed decimals with thousands grouping.
pub fn currency_usd(amount: Decimal) -> String {
    let fixed = fixed_two(amount);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn fixed_two(amount: Decimal) -> String {
    let mut rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Medium date, e.g. `Oct 19, 2026`. Returns an empty string when `raw` is not
/// a timestamp we understand.
pub fn medium_date(raw: &str) -> String {
    parse_date(raw.trim())
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(stamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
