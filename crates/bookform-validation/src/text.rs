//! String helpers with browser string semantics

/// Byte order mark, stripped by the browser's `trim` alongside Unicode whitespace.
const BOM: char = '\u{feff}';

/// NEL is Unicode whitespace but not whitespace to the browser.
const NEXT_LINE: char = '\u{85}';

/// Trims leading and trailing whitespace the way the browser's `String.prototype.trim` does.
pub fn trim_js(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != NEXT_LINE) || c == BOM)
}

/// Length in UTF-16 code units, the unit form controls report.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Trimmed length in UTF-16 code units
pub fn trimmed_len(s: &str) -> usize {
    utf16_len(trim_js(s))
}

/// Which side of a length bound a value fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Below,
    Above,
}

/// Validates trimmed length against an inclusive range; `max: None` means unbounded.
pub fn check_trimmed_len(s: &str, min: usize, max: Option<usize>) -> Result<(), LengthBound> {
    let len = trimmed_len(s);
    if len < min {
        return Err(LengthBound::Below);
    }
    match max {
        Some(max) if len > max => Err(LengthBound::Above),
        _ => Ok(()),
    }
}
