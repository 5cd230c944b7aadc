use rust_decimal::Decimal;

/// Format a price with thousand separators, keeping cents only when present.
/// e.g. `4530000` → `"$4,530,000"`, `1234.5` → `"$1,234.50"`
pub(crate) fn format_price(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = if abs.fract().is_zero() {
        format!("{:.0}", abs.trunc())
    } else {
        format!("{abs:.2}")
    };
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    match dec_part {
        Some(cents) => format!("{sign}${with_commas}.{cents}"),
        None => format!("{sign}${with_commas}"),
    }
}

/// Percentage with at most two decimals and no trailing zeros.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{}%", val.round_dp(2).normalize())
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Human-readable byte count.
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
