use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finwiz_core::borrow::amortization::{self, LoanParameters};
use finwiz_core::borrow::offers::{self, OfferQuoteInput};

use crate::input;

/// Arguments for the loan amortisation calculator
#[derive(Args)]
pub struct AmortizeArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual percentage rate, e.g. 8.9
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Include every period, not just the six-month preview
    #[arg(long)]
    pub full: bool,
}

/// Unset flags fall back to the calculator defaults.
fn loan_from_flags(args: &AmortizeArgs) -> LoanParameters {
    let defaults = LoanParameters::default();
    LoanParameters {
        principal: args.amount.unwrap_or(defaults.principal),
        annual_rate_percent: args.apr.unwrap_or(defaults.annual_rate_percent),
        term_months: args.term.unwrap_or(defaults.term_months),
    }
}

fn amortize(params: &LoanParameters, full: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let result = amortization::calculate_amortization(params)?;
    let mut value = serde_json::to_value(result)?;
    if !full {
        if let Some(Value::Object(res)) = value.get_mut("result") {
            res.remove("schedule");
        }
    }
    Ok(value)
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params: LoanParameters =
        input::resolve(args.input.as_deref(), || Ok(loan_from_flags(&args)))?;
    amortize(&params, args.full)
}

pub fn run_offers() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(offers::loan_offers())?)
}

/// Arguments for quoting a loan offer
#[derive(Args)]
pub struct QuoteArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Offer id, e.g. finwiz-flex
    #[arg(long)]
    pub offer: Option<String>,

    /// Amount to borrow (defaults to the offer maximum)
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Term in months (defaults to the offer maximum)
    #[arg(long)]
    pub term: Option<u32>,
}

fn quote_from_flags(args: &QuoteArgs) -> Result<OfferQuoteInput, Box<dyn std::error::Error>> {
    let offer_id = args
        .offer
        .clone()
        .ok_or("--offer is required (or provide --input)")?;
    Ok(OfferQuoteInput {
        offer_id,
        amount: args.amount,
        term_months: args.term,
    })
}

pub fn run_quote(args: QuoteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input: OfferQuoteInput =
        input::resolve(args.input.as_deref(), || quote_from_flags(&args))?;
    let result = offers::quote_offer(&quote_input)?;
    Ok(serde_json::to_value(result)?)
}
