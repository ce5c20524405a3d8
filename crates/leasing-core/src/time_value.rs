use crate::types::{Money, Rate};

/// Compound growth factor `(1 + rate)^nper`.
///
/// `nper` is fractional-safe: a non-integer term is raised as-is.
pub fn growth_factor(rate: Rate, nper: f64) -> f64 {
    (1.0 + rate).powf(nper)
}

/// Payment (PMT) that fully amortizes `principal` over `nper` periods at
/// the periodic `rate`, paid in arrears:
///
/// `principal * rate * (1 + rate)^nper / ((1 + rate)^nper - 1)`
///
/// Callers must rule out `rate == 0`, where the denominator vanishes. For
/// rates that are positive but tiny the denominator loses precision and the
/// result degrades accordingly; no correction is attempted.
pub fn annuity_payment(rate: Rate, nper: f64, principal: Money) -> Money {
    let factor = growth_factor(rate, nper);
    (principal * rate * factor) / (factor - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_factor_basic() {
        assert_eq!(growth_factor(0.10, 2.0), (1.0_f64 + 0.10).powf(2.0));
        assert_eq!(growth_factor(0.05, 0.0), 1.0);
    }

    #[test]
    fn test_annuity_payment_textbook() {
        // 1000 over 12 periods at 1%: ~88.85
        let result = annuity_payment(0.01, 12.0, 1000.0);
        assert!((result - 88.85).abs() < 0.01, "got {result}");
    }

    #[test]
    fn test_annuity_payment_single_period() {
        // One period: repay principal plus one period of interest
        let result = annuity_payment(0.025, 1.0, 1000.0);
        assert!((result - 1025.0).abs() < 1e-9, "got {result}");
    }

    #[test]
    fn test_annuity_payment_covers_interest() {
        let principal = 50_000.0;
        let rate = 0.025;
        let result = annuity_payment(rate, 60.0, principal);
        assert!(result > principal * rate);
        assert!(result < principal);
    }
}
