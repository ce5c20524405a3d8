use clap::Args;
use serde_json::{json, Value};

use leasing_core::{format_currency, parse_value};

/// Arguments for text normalization
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ParseArgs {
    /// Free text as typed in a form field
    pub text: String,
}

/// Arguments for currency formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Amount to format; any text accepted by `parse`
    pub value: String,
}

pub fn run_parse(args: ParseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = parse_value(&args.text);
    Ok(json!({ "input": args.text, "value": value }))
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = parse_value(&args.value);
    Ok(json!({ "value": value, "formatted": format_currency(value) }))
}
