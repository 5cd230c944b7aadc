use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::{
    DEFAULT_DISCOUNT, DISCOUNT_MAX, DISCOUNT_MIN, PRICE_CORRECTION_CEILING,
    PRICE_CORRECTION_FACTOR,
};

/// Discount percentage from free-form text such as `"45%"` or `"12,5"`.
///
/// The first comma is read as the decimal point. Anything unparseable,
/// including a missing cell, becomes the default discount. The result is
/// clamped to `[0, 100]`.
pub fn normalize_discount(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return DEFAULT_DISCOUNT;
    };
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let cleaned = cleaned.replacen(',', ".", 1);

    leading_number(&cleaned)
        .unwrap_or(DEFAULT_DISCOUNT)
        .clamp(DISCOUNT_MIN, DISCOUNT_MAX)
        .normalize()
}

/// Unit price from spreadsheet text in either `1.234,56` or `1,234.56` style.
///
/// - several commas: all are thousands separators
/// - a comma and a dot: dots are thousands, the comma is the decimal point
/// - a single comma alone: thousands separator (`4,530` is 4530)
///
/// Values strictly between 0 and 100 are then multiplied by 1000, undoing
/// exports where `4.530` meant four thousand five hundred thirty. This also
/// inflates genuinely cheap items; see DESIGN.md.
pub fn normalize_price(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };
    let mut cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .collect();

    let commas = cleaned.matches(',').count();
    if commas > 1 {
        cleaned = cleaned.replace(',', "");
    } else if commas == 1 && cleaned.contains('.') {
        cleaned = cleaned.replace('.', "").replace(',', ".");
    } else if commas == 1 {
        cleaned = cleaned.replace(',', "");
    }

    let value = leading_number(&cleaned).unwrap_or(Decimal::ZERO);
    let value = if value > Decimal::ZERO && value < PRICE_CORRECTION_CEILING {
        value * PRICE_CORRECTION_FACTOR
    } else {
        value
    };
    value.normalize()
}

/// Longest numeric prefix of `s` (`-?digits[.digits]`), parsed as a decimal.
/// Trailing garbage is ignored and no digits is `None`. Values too large for
/// a `Decimal` saturate to `Decimal::MAX` (or `MIN`) so callers can clamp.
fn leading_number(s: &str) -> Option<Decimal> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let int_part = &rest[..int_len];
    let frac_part = rest[int_len..]
        .strip_prefix('.')
        .map(|tail| {
            let len = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
            &tail[..len]
        })
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut literal = String::with_capacity(rest.len() + 2);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }
    match Decimal::from_str(&literal) {
        Ok(value) => Some(value),
        Err(_) if negative => Some(Decimal::MIN),
        Err(_) => Some(Decimal::MAX),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
