//! Text normalization: markup stripping and locale-tolerant amount parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{TAG, WHITESPACE};

/// Strip markup tags and collapse whitespace runs (including non-breaking
/// spaces) to single ASCII spaces. Returns `None` when nothing but markup and
/// whitespace remains.
pub fn strip_and_collapse(text: &str) -> Option<String> {
    let stripped = TAG.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a locale-formatted amount (e.g. "1.234,56", "1,234.56", "12,34 €").
///
/// Currency symbols and other stray characters are dropped before the
/// separator format is disambiguated: when both `,` and `.` occur, the
/// rightmost one is taken as the decimal point and the other is removed as a
/// thousands separator; a lone comma is a decimal comma; otherwise commas are
/// thousands separators. Returns `None` for anything that does not survive as
/// a number; malformed input is a legitimate outcome, never a panic.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let raw: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    if raw.is_empty() {
        return None;
    }

    let normalized = match (raw.rfind(','), raw.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => raw.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => raw.replace(',', ""),
        (Some(_), None) if raw.matches(',').count() == 1 => raw.replace(',', "."),
        _ => raw.replace(',', ""),
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_strip_and_collapse() {
        assert_eq!(
            strip_and_collapse("<b>ΑΒ\u{00a0}ΒΑΣΙΛΟΠΟΥΛΟΣ</b>\n  Α.Ε."),
            Some("ΑΒ ΒΑΣΙΛΟΠΟΥΛΟΣ Α.Ε.".to_string())
        );
        assert_eq!(strip_and_collapse("  <br/> \t"), None);
        assert_eq!(strip_and_collapse(""), None);
    }

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("1.234,56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1234,56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("12,34 €"), Some(dec("12.34")));
        assert_eq!(parse_amount("1234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1 234,56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("-3,50"), Some(dec("-3.50")));
        assert_eq!(parse_amount("1,234,567.89"), Some(dec("1234567.89")));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("EUR"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("1.2.3,4,5"), None);
    }
}
