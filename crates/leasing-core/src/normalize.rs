//! Free-text field normalization.
//!
//! Every form field reaches the calculator through [`parse_value`]. There is
//! no invalid state: text that does not start with a number becomes `0`.
//! The parser also accepts the strings produced by
//! [`format_currency`](crate::currency::format_currency), so displayed values
//! can be fed straight back in.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::currency::{DECIMAL_SEPARATOR, GROUPING_SEPARATOR};

fn non_numeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.\-]").expect("static pattern"))
}

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("static pattern"))
}

/// Parse a field's text into a number, defaulting to `0`.
///
/// Steps:
/// 1. If the last `,` is not followed by a `.` (`R$ 1.234,56`), grouping dots
///    are dropped and the comma becomes a decimal point. Otherwise commas are
///    grouping and get stripped with the rest (`1,234.56`).
/// 2. Everything except ASCII digits, `-` and `.` is stripped.
/// 3. The longest leading float literal is parsed; `1.2.3` reads as `1.2`.
///
/// Empty, sign-only or otherwise unparsable text yields `0`, as do NaN and
/// negative zero.
pub fn parse_value(text: &str) -> f64 {
    let localized = delocalize(text);
    let cleaned = non_numeric().replace_all(&localized, "");

    let value = leading_number()
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Keep only ASCII digits. Used when a formatted currency field is edited:
/// the display string is re-entered as its raw digit sequence.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

fn delocalize(text: &str) -> Cow<'_, str> {
    let comma_is_decimal = text
        .rfind(DECIMAL_SEPARATOR)
        .is_some_and(|at| !text[at..].contains(GROUPING_SEPARATOR));
    if !comma_is_decimal {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .filter(|c| *c != GROUPING_SEPARATOR)
            .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numerals() {
        assert_eq!(parse_value("60"), 60.0);
        assert_eq!(parse_value("2.50"), 2.5);
        assert_eq!(parse_value("-3.5"), -3.5);
        assert_eq!(parse_value(".5"), 0.5);
        assert_eq!(parse_value("5."), 5.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        for text in ["", "abc", "-", ".", "-.", "--5", "R$", "   "] {
            assert_eq!(parse_value(text), 0.0, "input {text:?}");
        }
    }

    #[test]
    fn test_parse_negative_zero_is_positive_zero() {
        let value = parse_value("-0");
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_parse_leading_prefix() {
        assert_eq!(parse_value("1.2.3"), 1.2);
        assert_eq!(parse_value("5-3"), 5.0);
        assert_eq!(parse_value("12abc34"), 1234.0);
    }

    #[test]
    fn test_parse_brazilian_currency() {
        assert_eq!(parse_value("R$\u{a0}50.000.000,00"), 50_000_000.0);
        assert_eq!(parse_value("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_value("-R$\u{a0}1.234,56"), -1234.56);
        assert_eq!(parse_value("1,5"), 1.5);
    }

    #[test]
    fn test_parse_comma_grouping() {
        assert_eq!(parse_value("50,000.00"), 50_000.0);
        assert_eq!(parse_value("1,234,567.8"), 1_234_567.8);
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("R$\u{a0}50.000.000,001"), "50000000001");
        assert_eq!(digits_only("abc"), "");
    }
}
