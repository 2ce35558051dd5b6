use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinWizError;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::FinWizResult;

/// Number of rows shown in the amortisation preview table.
pub const PREVIEW_ROWS: usize = 6;

/// Terms beyond this many months are accepted but flagged.
pub const LONG_TERM_MONTHS: u32 = 120;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Fixed-rate, fixed-term loan parameters as entered on the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    /// Nominal APR in percent (8.9 = 8.9%).
    pub annual_rate_percent: Percent,
    pub term_months: u32,
}

impl Default for LoanParameters {
    fn default() -> Self {
        LoanParameters {
            principal: dec!(5000),
            annual_rate_percent: dec!(8.9),
            term_months: 36,
        }
    }
}

impl LoanParameters {
    /// Periodic rate: APR / 100 / 12.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / dec!(100) / dec!(12)
    }

    pub fn validate(&self) -> FinWizResult<()> {
        if self.term_months == 0 {
            return Err(FinWizError::invalid(
                "term_months",
                "term must be at least one month",
            ));
        }
        if self.principal < Decimal::ZERO {
            return Err(FinWizError::invalid("principal", "principal must be >= 0"));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(FinWizError::invalid(
                "annual_rate_percent",
                "APR must be >= 0",
            ));
        }
        Ok(())
    }
}

/// One month of an amortisation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub period: u32,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub remaining_balance: Money,
}

/// Totals shown under the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub monthly_payment: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_repayable: Money,
}

/// Output of `calculate_amortization`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub summary: ScheduleSummary,
    pub preview: Vec<PeriodEntry>,
    pub schedule: Vec<PeriodEntry>,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Level monthly payment for a fully amortising loan.
///
/// Falls back to straight-line `principal / term` when the rate is zero.
pub fn level_payment(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
) -> FinWizResult<Money> {
    let payment = time_value::pmt(monthly_rate, term_months, principal, Decimal::ZERO)?;
    Ok(-payment)
}

/// Build the period-by-period schedule for a level-payment loan.
///
/// The principal portion is capped at the outstanding balance every period,
/// so the balance never goes negative and the last entry lands on zero.
/// Rate/term combinations whose growth factor leaves the Decimal range are
/// reported as `InvalidInput` rather than panicking.
pub fn compute_schedule(
    principal: Money,
    annual_rate_percent: Percent,
    term_months: u32,
) -> FinWizResult<Vec<PeriodEntry>> {
    let params = LoanParameters {
        principal,
        annual_rate_percent,
        term_months,
    };
    params.validate()?;

    let r = params.monthly_rate();
    let payment = level_payment(principal, r, term_months)?;
    log::debug!(
        "amortizing {principal} at {annual_rate_percent}% over {term_months} months: payment {payment}"
    );

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = time_value::mul("interest_portion", balance, r)?;
        let principal_paid = time_value::sub("principal_portion", payment, interest)?.min(balance);
        balance = (balance - principal_paid).max(Decimal::ZERO);

        schedule.push(PeriodEntry {
            period,
            payment_amount: payment,
            interest_portion: interest,
            principal_portion: principal_paid,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}

/// Total interest and total repayable for a schedule.
///
/// Schedules may come from outside the engine, so the totals are summed
/// with overflow checks.
pub fn summarize(schedule: &[PeriodEntry]) -> FinWizResult<ScheduleSummary> {
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;
    for entry in schedule {
        total_interest =
            time_value::add("interest_portion", total_interest, entry.interest_portion)?;
        total_principal =
            time_value::add("principal_portion", total_principal, entry.principal_portion)?;
    }
    let monthly_payment = schedule
        .first()
        .map(|p| p.payment_amount)
        .unwrap_or(Decimal::ZERO);

    Ok(ScheduleSummary {
        monthly_payment,
        total_principal,
        total_interest,
        total_repayable: time_value::add("total_repayable", total_principal, total_interest)?,
    })
}

/// First `rows` entries of a schedule (all of it when shorter).
pub fn amortization_preview(schedule: &[PeriodEntry], rows: usize) -> &[PeriodEntry] {
    &schedule[..rows.min(schedule.len())]
}

/// Full calculator run: schedule, summary and preview in the standard envelope.
pub fn calculate_amortization(
    input: &LoanParameters,
) -> FinWizResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let schedule = compute_schedule(
        input.principal,
        input.annual_rate_percent,
        input.term_months,
    )?;

    if input.principal.is_zero() {
        warnings.push("Principal is zero; schedule is all zeros".into());
    }
    if input.annual_rate_percent.is_zero() {
        warnings.push("Interest-free loan; principal repaid in equal instalments".into());
    }
    if input.term_months > LONG_TERM_MONTHS {
        warnings.push(format!(
            "Term of {} months exceeds the usual {LONG_TERM_MONTHS}-month maximum",
            input.term_months
        ));
    }

    let summary = summarize(&schedule)?;
    let preview = amortization_preview(&schedule, PREVIEW_ROWS).to_vec();

    let output = AmortizationOutput {
        summary,
        preview,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Level-payment amortisation (monthly compounding, fixed APR)",
        input,
        warnings,
        elapsed,
        output,
    ))
}
