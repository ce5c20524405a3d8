//! Leasing cost pipeline.
//!
//! Turns the five scalar inputs of a leasing simulation into the rent
//! installment and its after-tax figures:
//!
//! 1. operation value = asset value + extra expenses
//! 2. rent installment = PMT(rate, term, operation value), or 0 when the
//!    term or rate is not positive
//! 3. PIS/COFINS credit = installment x 9.25%
//! 4. net rent after PIS/COFINS = installment - credit
//! 5. IR reduction = net rent x 34%
//! 6. net rent after IR = net rent - IR reduction
//! 7. total net investment = net rent after IR x term
//!
//! The pipeline is total: it performs no validation and every input,
//! negative or absurd, produces whatever the formulas yield.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::annuity_payment;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// PIS/COFINS credit taken on each rent installment.
pub const PIS_COFINS_RATE: Rate = 0.0925;

/// Income tax (IR) reduction applied after the PIS/COFINS credit.
pub const IR_RATE: Rate = 0.34;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Normalized numeric inputs of one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseInputs {
    /// Price of the leased equipment
    pub asset_value: Money,
    /// Number of monthly installments
    pub term_months: f64,
    /// Monthly bank rate as a percentage (2.5 = 2.5% a month)
    pub bank_rate_percent: f64,
    /// IOF percentage. Collected but not used by any figure.
    pub iof_percent: f64,
    /// One-time costs financed together with the asset
    pub extra_expenses: Money,
}

impl Default for LeaseInputs {
    fn default() -> Self {
        Self {
            asset_value: 50_000_000.0,
            term_months: 60.0,
            bank_rate_percent: 2.5,
            iof_percent: 0.0,
            extra_expenses: 0.0,
        }
    }
}

/// Derived figures, recomputed from scratch on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseResults {
    pub operation_value: Money,
    pub rent_installment: Money,
    pub pis_cofins_credit: Money,
    pub net_rent_after_pis_cofins: Money,
    pub ir_reduction: Money,
    pub net_rent_after_ir: Money,
    pub total_net_investment: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the leasing pipeline. Pure and deterministic.
pub fn calculate(inputs: &LeaseInputs) -> LeaseResults {
    let operation_value = inputs.asset_value + inputs.extra_expenses;
    let rate = inputs.bank_rate_percent / 100.0;
    let term = inputs.term_months;

    let rent_installment = if term > 0.0 && rate > 0.0 {
        annuity_payment(rate, term, operation_value)
    } else {
        0.0
    };

    let pis_cofins_credit = rent_installment * PIS_COFINS_RATE;
    let net_rent_after_pis_cofins = rent_installment - pis_cofins_credit;
    let ir_reduction = net_rent_after_pis_cofins * IR_RATE;
    let net_rent_after_ir = net_rent_after_pis_cofins - ir_reduction;
    let total_net_investment = net_rent_after_ir * term;

    LeaseResults {
        operation_value,
        rent_installment,
        pis_cofins_credit,
        net_rent_after_pis_cofins,
        ir_reduction,
        net_rent_after_ir,
        total_net_investment,
    }
}

/// Run [`calculate`] and wrap the figures in the standard output envelope.
///
/// Warnings flag inputs a user probably did not intend; they never alter
/// the figures.
pub fn analyze_lease(inputs: &LeaseInputs) -> ComputationOutput<LeaseResults> {
    let start = Instant::now();

    let result = calculate(inputs);
    let warnings = collect_warnings(inputs);
    for w in &warnings {
        tracing::debug!(warning = %w, "lease input warning");
    }

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Monthly annuity rent (PMT) net of PIS/COFINS credit and IR reduction",
        inputs,
        warnings,
        elapsed,
        result,
    )
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn collect_warnings(inputs: &LeaseInputs) -> Vec<String> {
    let mut warnings = Vec::new();

    if inputs.iof_percent != 0.0 {
        warnings.push(format!(
            "IOF of {}% is not applied to any figure",
            inputs.iof_percent
        ));
    }
    if inputs.term_months <= 0.0 || inputs.bank_rate_percent <= 0.0 {
        warnings.push(
            "Rent installment is zero: a positive term and bank rate are required".to_string(),
        );
    }

    let negatives = [
        ("asset_value", inputs.asset_value),
        ("term_months", inputs.term_months),
        ("bank_rate_percent", inputs.bank_rate_percent),
        ("extra_expenses", inputs.extra_expenses),
    ];
    for (field, value) in negatives {
        if value < 0.0 {
            warnings.push(format!("Negative {field} ({value}) used as given"));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_installment() -> f64 {
        let growth = 1.025_f64.powf(60.0);
        50_000_000.0 * 0.025 * growth / (growth - 1.0)
    }

    #[test]
    fn test_reference_scenario() {
        let r = calculate(&LeaseInputs::default());
        assert_eq!(r.operation_value, 50_000_000.0);
        let expected = reference_installment();
        assert!(((r.rent_installment - expected) / expected).abs() < 1e-12);
        assert_eq!(r.pis_cofins_credit, r.rent_installment * 0.0925);
        assert_eq!(r.total_net_investment, r.net_rent_after_ir * 60.0);
    }

    #[test]
    fn test_zero_rate_zeroes_installment() {
        let inputs = LeaseInputs {
            bank_rate_percent: 0.0,
            ..LeaseInputs::default()
        };
        let r = calculate(&inputs);
        assert_eq!(r.rent_installment, 0.0);
        assert_eq!(r.total_net_investment, 0.0);
    }

    #[test]
    fn test_negative_term_is_not_an_error() {
        let inputs = LeaseInputs {
            term_months: -12.0,
            ..LeaseInputs::default()
        };
        let r = calculate(&inputs);
        assert_eq!(r.rent_installment, 0.0);
        assert_eq!(r.operation_value, 50_000_000.0);
    }

    #[test]
    fn test_warnings_for_iof_and_zero_term() {
        let inputs = LeaseInputs {
            term_months: 0.0,
            iof_percent: 0.38,
            ..LeaseInputs::default()
        };
        let warnings = collect_warnings(&inputs);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("IOF"));
        assert!(warnings[1].contains("zero"));
    }

    #[test]
    fn test_default_inputs_have_no_warnings() {
        assert!(collect_warnings(&LeaseInputs::default()).is_empty());
    }
}
