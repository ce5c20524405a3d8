//! Brazilian real display formatting.
//!
//! Mirrors the pt-BR currency style: `R$`, a non-breaking space, dot
//! thousands grouping and a two-digit comma fraction.

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "R$";
pub const DECIMAL_SEPARATOR: char = ',';
pub const GROUPING_SEPARATOR: char = '.';

const SYMBOL_SPACING: char = '\u{a0}';

/// Render `value` as a pt-BR currency string, e.g. `R$ 50.000.000,00`.
///
/// Cents are rounded half away from zero on the exact binary value of the
/// input. Negative values (negative zero included) carry a leading `-`.
pub fn format_currency(value: f64) -> String {
    let sign = if value.is_sign_negative() && !value.is_nan() {
        "-"
    } else {
        ""
    };
    let amount = if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        "∞".to_string()
    } else {
        localize_fixed(&fixed_two_places(value.abs()))
    };
    format!("{sign}{CURRENCY_SYMBOL}{SYMBOL_SPACING}{amount}")
}

fn to_cents(amount: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn fixed_two_places(amount: f64) -> String {
    match to_cents(amount) {
        Some(cents) => format!("{cents:.2}"),
        // Beyond Decimal's range
        None => format!("{amount:.2}"),
    }
}

/// `1234567.89` -> `1.234.567,89`
fn localize_fixed(fixed: &str) -> String {
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed, "00"));
    let mut out = String::with_capacity(fixed.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(GROUPING_SEPARATOR);
        }
        out.push(ch);
    }
    out.push(DECIMAL_SEPARATOR);
    out.push_str(fraction);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_reference_default() {
        assert_eq!(format_currency(50_000_000.0), "R$\u{a0}50.000.000,00");
    }

    #[test]
    fn test_format_small_and_zero() {
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(7.5), "R$\u{a0}7,50");
        assert_eq!(format_currency(999.0), "R$\u{a0}999,00");
        assert_eq!(format_currency(1000.0), "R$\u{a0}1.000,00");
    }

    #[test]
    fn test_format_rounding_carries_into_grouping() {
        assert_eq!(format_currency(999.999), "R$\u{a0}1.000,00");
        assert_eq!(format_currency(123_456.789), "R$\u{a0}123.456,79");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1234.56), "-R$\u{a0}1.234,56");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}NaN");
        assert_eq!(format_currency(f64::INFINITY), "R$\u{a0}∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-R$\u{a0}∞");
    }

    #[test]
    fn test_cents_round_half_away_from_zero() {
        // 0.125 and 0.375 are exact in binary, so these are true midpoints
        assert_eq!(to_cents(0.125), Some(dec!(0.13)));
        assert_eq!(to_cents(0.375), Some(dec!(0.38)));
        // 1.005 is stored slightly below the midpoint
        assert_eq!(to_cents(1.005), Some(dec!(1.00)));
    }

    #[test]
    fn test_localize_fixed() {
        assert_eq!(localize_fixed("1234567.89"), "1.234.567,89");
        assert_eq!(localize_fixed("123.40"), "123,40");
    }
}
