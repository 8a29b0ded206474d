//! Lenient coercions for upstream attribute values.
//!
//! The catalogue API encodes every number as an XML attribute string that may
//! be missing, empty, or a placeholder such as `"N/A"`. These helpers turn
//! such values into zero instead of failing the whole decode. They are the
//! only place where a field-level parse failure is silently absorbed.

use chrono::NaiveDate;

/// Date layout used by the plays endpoint and play submission (`2024-03-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an integer, yielding 0 for empty or unparsable input.
pub fn int_or_zero(s: &str) -> i64 {
    let s = s.trim();
    if s.is_empty() {
        return 0;
    }
    s.parse().unwrap_or(0)
}

/// Parse a float, yielding 0.0 for empty, unparsable or non-finite input.
pub fn float_or_zero(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Boolean-like attributes (`"1"`, `"0"`, absent) are true when non-zero.
pub fn nonzero(s: &str) -> bool {
    int_or_zero(s) != 0
}

/// Parse a date with the given `chrono` format.
///
/// `None` is the zero value: unparsable input never produces an error.
pub fn date_or_zero(s: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), format).ok()
}

/// Share of `a` in `a + b + c`, as a percentage.
///
/// Returns 0 when the sum is not positive. The numerator always comes first;
/// `b` and `c` only contribute to the denominator.
pub fn voting_percentage(a: i64, b: i64, c: i64) -> f32 {
    let sum = a as f64 + b as f64 + c as f64;
    if sum <= 0.0 {
        return 0.0;
    }
    (a as f64 / sum * 100.0) as f32
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
