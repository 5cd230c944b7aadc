#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("PASTILLA FRENO DELANTERA", 8), "PASTILL…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_accents() {
    assert_eq!(truncate("Bujía iridio", 5), "Bují…");
}

// ── format_price ──────────────────────────────────────────────

#[test]
fn test_format_price_integer() {
    assert_eq!(format_price(dec!(4530000)), "$4,530,000");
    assert_eq!(format_price(dec!(45000)), "$45,000");
    assert_eq!(format_price(dec!(999)), "$999");
}

#[test]
fn test_format_price_cents() {
    assert_eq!(format_price(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_price(dec!(1234.5)), "$1,234.50");
}

#[test]
fn test_format_price_zero() {
    assert_eq!(format_price(Decimal::ZERO), "$0");
}

#[test]
fn test_format_price_trailing_zero_scale() {
    assert_eq!(format_price(dec!(45000.000)), "$45,000");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(dec!(20)), "20%");
    assert_eq!(format_percent(dec!(12.50)), "12.5%");
    assert_eq!(format_percent(dec!(33.333)), "33.33%");
}

// ── format_size ───────────────────────────────────────────────

#[test]
fn test_format_size() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2.0 KB");
    assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
}
