//! Numeric parsing and range checks

use crate::text::trim_js;

/// Integer literal prefixes accepted by the browser's numeric coercion.
const RADIX_PREFIXES: &[(&str, u32)] = &[
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// Parses a form value as a number, following the browser's `Number(value)` coercion.
///
/// Differences from `str::parse::<f64>`:
/// - surrounding whitespace is ignored
/// - `0x`, `0o` and `0b` integer literals are accepted
/// - only `Infinity` is accepted as a spelled-out value (`inf`, `nan` are rejected)
///
/// An empty (or all-whitespace) value returns `None` instead of zero.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = trim_js(raw);
    if s.is_empty() {
        return None;
    }

    for &(prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }

    s.parse::<f64>().ok()
}

/// Checks that a value lies within an inclusive range. NaN is never in range.
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("+2"), Some(2.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e0"), Some(1.0));
    }

    #[test]
    fn test_parse_radix_literals() {
        assert_eq!(parse_number("0x5"), Some(5.0));
        assert_eq!(parse_number("0b11"), Some(3.0));
        assert_eq!(parse_number("0o4"), Some(4.0));
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0x+5"), None);
        assert_eq!(parse_number("0b2"), None);
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("six"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("3 stars"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("\u{85}3"), None);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(1.0, 1.0, 5.0));
        assert!(in_range(5.0, 1.0, 5.0));
        assert!(!in_range(0.999, 1.0, 5.0));
        assert!(!in_range(5.001, 1.0, 5.0));
        assert!(!in_range(f64::NAN, 1.0, 5.0));
        assert!(!in_range(f64::INFINITY, 1.0, 5.0));
    }
}
