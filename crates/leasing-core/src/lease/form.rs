//! Raw field state of a leasing simulation.
//!
//! A [`LeaseForm`] owns the five strings a user edits. It is never mutated in
//! place: each edit returns a new form, and figures are recomputed from the
//! snapshot every time they are requested.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::format_currency;
use crate::error::LeasingError;
use crate::lease::calculator::{calculate, LeaseInputs, LeaseResults};
use crate::normalize::{digits_only, parse_value};

/// One editable input of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    AssetValue,
    TermMonths,
    BankRatePercent,
    IofPercent,
    ExtraExpenses,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 5] = [
        FormField::AssetValue,
        FormField::TermMonths,
        FormField::BankRatePercent,
        FormField::IofPercent,
        FormField::ExtraExpenses,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::AssetValue => "asset_value",
            FormField::TermMonths => "term_months",
            FormField::BankRatePercent => "bank_rate_percent",
            FormField::IofPercent => "iof_percent",
            FormField::ExtraExpenses => "extra_expenses",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::AssetValue => "Valor do bem",
            FormField::TermMonths => "Prazo em meses",
            FormField::BankRatePercent => "Taxa banco (%)",
            FormField::IofPercent => "IOF (%)",
            FormField::ExtraExpenses => "Despesas extras",
        }
    }

    /// Currency fields are displayed formatted and edited as digits.
    pub fn is_currency(self) -> bool {
        matches!(self, FormField::AssetValue | FormField::ExtraExpenses)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = LeasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('-', "_");
        FormField::ALL
            .into_iter()
            .find(|field| field.key() == key)
            .ok_or_else(|| LeasingError::UnknownField(s.to_string()))
    }
}

/// Snapshot of the five raw field strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseForm {
    pub asset_value: String,
    pub term_months: String,
    pub bank_rate_percent: String,
    pub iof_percent: String,
    pub extra_expenses: String,
}

impl Default for LeaseForm {
    fn default() -> Self {
        Self {
            asset_value: "50000000".into(),
            term_months: "60".into(),
            bank_rate_percent: "2.50".into(),
            iof_percent: "0.00".into(),
            extra_expenses: "0".into(),
        }
    }
}

impl LeaseForm {
    /// Raw text currently held for `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::AssetValue => &self.asset_value,
            FormField::TermMonths => &self.term_months,
            FormField::BankRatePercent => &self.bank_rate_percent,
            FormField::IofPercent => &self.iof_percent,
            FormField::ExtraExpenses => &self.extra_expenses,
        }
    }

    /// New form with `text` stored verbatim in `field`.
    pub fn with_field(&self, field: FormField, text: &str) -> LeaseForm {
        tracing::debug!(field = %field, text, "form field set");
        let mut next = self.clone();
        *next.slot(field) = text.to_string();
        next
    }

    /// New form after the user edited the displayed value of `field`.
    ///
    /// Currency fields show a formatted amount, so the edited display text is
    /// reduced to its digits. `R$ 1.234,56` typed over becomes `123456`.
    pub fn with_display_edit(&self, field: FormField, text: &str) -> LeaseForm {
        if field.is_currency() {
            self.with_field(field, &digits_only(text))
        } else {
            self.with_field(field, text)
        }
    }

    /// What the input control shows for `field`.
    pub fn display_value(&self, field: FormField) -> String {
        let raw = self.value(field);
        if field.is_currency() {
            format_currency(parse_value(raw))
        } else {
            raw.to_string()
        }
    }

    /// Normalize every field into calculator inputs.
    pub fn snapshot(&self) -> LeaseInputs {
        LeaseInputs {
            asset_value: parse_value(&self.asset_value),
            term_months: parse_value(&self.term_months),
            bank_rate_percent: parse_value(&self.bank_rate_percent),
            iof_percent: parse_value(&self.iof_percent),
            extra_expenses: parse_value(&self.extra_expenses),
        }
    }

    /// Recompute the figures from scratch off [`snapshot`](Self::snapshot).
    pub fn evaluate(&self) -> LeaseResults {
        calculate(&self.snapshot())
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::AssetValue => &mut self.asset_value,
            FormField::TermMonths => &mut self.term_months,
            FormField::BankRatePercent => &mut self.bank_rate_percent,
            FormField::IofPercent => &mut self.iof_percent,
            FormField::ExtraExpenses => &mut self.extra_expenses,
        }
    }
}
