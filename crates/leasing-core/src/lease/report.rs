//! Results panel model: labelled, display-ready rows for one form snapshot.

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::lease::calculator::LeaseResults;
use crate::lease::form::LeaseForm;

/// Shown beneath every simulation.
pub const DISCLAIMER: &str = "Este cálculo utiliza valores e taxas de mercado apenas como \
                              referência, sem validade para propostas comerciais.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Stable machine key
    pub key: String,
    pub label: String,
    /// Display string
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseReport {
    pub rows: Vec<ReportRow>,
    /// Unformatted figures behind the rows
    pub results: LeaseResults,
    pub disclaimer: String,
}

impl LeaseReport {
    pub fn row(&self, key: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.key == key)
    }
}

/// Evaluate `form` and lay the figures out in panel order.
pub fn build_report(form: &LeaseForm) -> LeaseReport {
    let results = form.evaluate();
    let money = |key: &str, label: &str, amount: f64| ReportRow {
        key: key.to_string(),
        label: label.to_string(),
        value: format_currency(amount),
    };

    let rows = vec![
        money("operation_value", "Valor da operação", results.operation_value),
        ReportRow {
            key: "term".to_string(),
            label: "Prazo".to_string(),
            value: format!("{} meses", form.term_months),
        },
        money("rent_installment", "Valor recibo de aluguel", results.rent_installment),
        money("pis_cofins_credit", "Créditos PIS e COFINS", results.pis_cofins_credit),
        money(
            "net_rent_after_pis_cofins",
            "Valor líquido aluguel (PIS/COFINS)",
            results.net_rent_after_pis_cofins,
        ),
        money("ir_reduction", "Redução do I.R.", results.ir_reduction),
        money("net_rent_after_ir", "Valor líquido do aluguel", results.net_rent_after_ir),
        money(
            "total_net_investment",
            "Investimento Líquido Total",
            results.total_net_investment,
        ),
    ];

    LeaseReport {
        rows,
        results,
        disclaimer: DISCLAIMER.to_string(),
    }
}
