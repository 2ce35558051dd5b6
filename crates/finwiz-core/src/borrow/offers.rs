use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::amortization::{compute_schedule, summarize, LoanParameters, ScheduleSummary};
use crate::error::FinWizError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinWizResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A pre-approved personal loan product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: String,
    pub name: String,
    pub max_amount: Money,
    pub annual_rate_percent: Percent,
    pub max_term_months: u32,
    pub features: Vec<String>,
}

/// Request to price one of the offers. Missing fields take the offer maxima.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferQuoteInput {
    pub offer_id: String,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub term_months: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferQuote {
    pub offer: LoanOffer,
    pub parameters: LoanParameters,
    pub summary: ScheduleSummary,
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

fn offer(
    id: &str,
    name: &str,
    max_amount: Money,
    annual_rate_percent: Percent,
    max_term_months: u32,
    features: &[&str],
) -> LoanOffer {
    LoanOffer {
        id: id.to_string(),
        name: name.to_string(),
        max_amount,
        annual_rate_percent,
        max_term_months,
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

/// Offers shown on the Borrow tab.
pub fn loan_offers() -> Vec<LoanOffer> {
    vec![
        offer(
            "finwiz-flex",
            "FinWiz Flex",
            dec!(5000),
            dec!(8.9),
            36,
            &["No early repayment fees", "Instant decision"],
        ),
        offer(
            "green-home",
            "Green Home Loan",
            dec!(12000),
            dec!(6.4),
            60,
            &["Energy upgrade cashback", "Fixed rate"],
        ),
        offer(
            "debt-consolidation",
            "Debt Consolidation",
            dec!(8000),
            dec!(7.2),
            48,
            &["Lower blended interest", "One simple payment"],
        ),
    ]
}

pub fn find_offer(id: &str) -> FinWizResult<LoanOffer> {
    loan_offers()
        .into_iter()
        .find(|o| o.id == id)
        .ok_or_else(|| FinWizError::invalid("offer_id", format!("unknown loan offer '{id}'")))
}

/// Price an offer at the requested amount and term.
pub fn quote_offer(input: &OfferQuoteInput) -> FinWizResult<ComputationOutput<OfferQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let offer = find_offer(&input.offer_id)?;

    let amount = input.amount.unwrap_or(offer.max_amount);
    if amount > offer.max_amount {
        return Err(FinWizError::invalid(
            "amount",
            format!("{} lends at most {}", offer.name, offer.max_amount),
        ));
    }

    let term_months = input.term_months.unwrap_or(offer.max_term_months);
    if term_months > offer.max_term_months {
        return Err(FinWizError::invalid(
            "term_months",
            format!("{} runs for at most {} months", offer.name, offer.max_term_months),
        ));
    }

    let parameters = LoanParameters {
        principal: amount,
        annual_rate_percent: offer.annual_rate_percent,
        term_months,
    };
    let schedule = compute_schedule(
        parameters.principal,
        parameters.annual_rate_percent,
        parameters.term_months,
    )?;
    let summary = summarize(&schedule)?;

    if term_months < offer.max_term_months {
        warnings.push(format!(
            "Shorter term than the {}-month maximum raises the monthly payment",
            offer.max_term_months
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Loan offer quote (level-payment amortisation)",
        input,
        warnings,
        elapsed,
        OfferQuote {
            offer,
            parameters,
            summary,
        },
    ))
}
