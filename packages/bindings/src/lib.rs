use napi::Result as NapiResult;
use napi_derive::napi;

use leasing_core::lease::calculator::{self, LeaseInputs};
use leasing_core::lease::form::{FormField, LeaseForm};
use leasing_core::lease::report;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Field text
// ---------------------------------------------------------------------------

#[napi]
pub fn parse_value(text: String) -> f64 {
    leasing_core::parse_value(&text)
}

#[napi]
pub fn format_currency(value: f64) -> String {
    leasing_core::format_currency(value)
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_lease(input_json: String) -> NapiResult<String> {
    let input: LeaseInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = calculator::calculate(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_lease(input_json: String) -> NapiResult<String> {
    let input: LeaseInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = calculator::analyze_lease(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

#[napi]
pub fn default_form() -> NapiResult<String> {
    serde_json::to_string(&LeaseForm::default()).map_err(to_napi_error)
}

/// Apply an edit made on the displayed value of `field` and return the new
/// form. Currency fields keep digits only.
#[napi]
pub fn edit_form(form_json: String, field: String, text: String) -> NapiResult<String> {
    let form: LeaseForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let field: FormField = field.parse().map_err(to_napi_error)?;
    let next = form.with_display_edit(field, &text);
    serde_json::to_string(&next).map_err(to_napi_error)
}

#[napi]
pub fn lease_report(form_json: String) -> NapiResult<String> {
    let form: LeaseForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let output = report::build_report(&form);
    serde_json::to_string(&output).map_err(to_napi_error)
}
