use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::prelude::ToPrimitive;

use finwiz_core::borrow::amortization::{self, PeriodEntry};
use finwiz_core::form::{self, LoanForm, LoanLimits};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Borrow
// ---------------------------------------------------------------------------

#[napi]
pub fn amortize(input_json: String) -> NapiResult<String> {
    let input: amortization::LoanParameters =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amortization::calculate_amortization(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Calculator entry point for raw text boxes. Text is coerced the way the
/// inputs do it (bad amount/APR -> 0, bad term -> 1) but never clamped.
#[napi]
pub fn amortize_form(amount: String, apr: String, term: String) -> NapiResult<String> {
    let params = LoanForm::from_text(&amount, &apr, &term).to_parameters();
    let output = amortization::calculate_amortization(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Slider positions, clamped to the slider ranges.
#[napi]
pub fn amortize_sliders(amount: f64, apr: f64, term: u32) -> NapiResult<String> {
    let params = LoanLimits::default()
        .from_sliders(amount, apr, term)
        .map_err(to_napi_error)?;
    let output = amortization::calculate_amortization(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn summarize_schedule(schedule_json: String) -> NapiResult<String> {
    let schedule: Vec<PeriodEntry> =
        serde_json::from_str(&schedule_json).map_err(to_napi_error)?;
    let summary = amortization::summarize(&schedule).map_err(to_napi_error)?;
    serde_json::to_string(&summary).map_err(to_napi_error)
}

#[napi]
pub fn list_loan_offers() -> NapiResult<String> {
    let offers = finwiz_core::borrow::offers::loan_offers();
    serde_json::to_string(&offers).map_err(to_napi_error)
}

#[napi]
pub fn quote_loan_offer(input_json: String) -> NapiResult<String> {
    let input: finwiz_core::borrow::offers::OfferQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finwiz_core::borrow::offers::quote_offer(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Invest
// ---------------------------------------------------------------------------

/// Naive projection straight from slider values.
#[napi]
pub fn project_contribution(monthly: f64, years: u32, growth_percent: f64) -> NapiResult<f64> {
    let monthly = form::decimal_from_f64("monthly_contribution", monthly).map_err(to_napi_error)?;
    let growth = form::decimal_from_f64("annual_growth_rate_percent", growth_percent)
        .map_err(to_napi_error)?;
    let projected =
        finwiz_core::invest::contributions::project_contribution(monthly, years, growth)
            .map_err(to_napi_error)?;
    projected
        .to_f64()
        .ok_or_else(|| to_napi_error("projected value out of f64 range"))
}

#[napi]
pub fn plan_contributions(input_json: String) -> NapiResult<String> {
    let input: finwiz_core::invest::contributions::ContributionPlan =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finwiz_core::invest::contributions::plan_contributions(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
