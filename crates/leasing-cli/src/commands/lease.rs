use clap::Args;
use serde_json::Value;

use leasing_core::lease::calculator;
use leasing_core::lease::form::{FormField, LeaseForm};
use leasing_core::lease::report;

use crate::input;

/// Form fields for a leasing simulation. Values are free text and go
/// through the same normalization as the form (`R$ 1.500,00` is accepted).
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LeaseArgs {
    /// Asset value (e.g. 50000000 or "R$ 50.000.000,00")
    #[arg(long)]
    pub asset_value: Option<String>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<String>,

    /// Monthly bank rate in percent (e.g. 2.50)
    #[arg(long, alias = "rate")]
    pub bank_rate: Option<String>,

    /// IOF in percent (recorded, not applied)
    #[arg(long)]
    pub iof: Option<String>,

    /// One-time extra expenses financed with the asset
    #[arg(long)]
    pub extra_expenses: Option<String>,

    /// Path to JSON form file; flags override its fields
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calculate(args: LeaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form = build_form(args)?;
    let inputs = form.snapshot();
    tracing::info!(
        asset_value = inputs.asset_value,
        term_months = inputs.term_months,
        bank_rate_percent = inputs.bank_rate_percent,
        "calculating lease"
    );
    let result = calculator::analyze_lease(&inputs);
    Ok(serde_json::to_value(result)?)
}

pub fn run_report(args: LeaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form = build_form(args)?;
    let result = report::build_report(&form);
    Ok(serde_json::to_value(result)?)
}

/// File, then piped stdin, then defaults; flags are applied last.
fn build_form(args: LeaseArgs) -> Result<LeaseForm, Box<dyn std::error::Error>> {
    let base: LeaseForm = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LeaseForm::default()
    };

    let overrides = [
        (FormField::AssetValue, args.asset_value),
        (FormField::TermMonths, args.term_months),
        (FormField::BankRatePercent, args.bank_rate),
        (FormField::IofPercent, args.iof),
        (FormField::ExtraExpenses, args.extra_expenses),
    ];

    Ok(overrides
        .into_iter()
        .fold(base, |form, (field, text)| match text {
            Some(text) => form.with_field(field, &text),
            None => form,
        }))
}
