use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinWizError;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinWizResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

fn default_growth() -> Percent {
    dec!(8)
}

/// Recurring monthly contribution plan from the Invest tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionPlan {
    pub monthly_contribution: Money,
    pub years: u32,
    /// Annual growth in percent (8 = 8%).
    #[serde(default = "default_growth")]
    pub annual_growth_rate_percent: Percent,
}

impl Default for ContributionPlan {
    fn default() -> Self {
        ContributionPlan {
            monthly_contribution: dec!(300),
            years: 5,
            annual_growth_rate_percent: default_growth(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionOutput {
    pub total_contributed: Money,
    /// Flat-multiplier projection shown on the dashboard.
    pub projected_value: Money,
    pub projected_gain: Money,
    /// Same contributions compounded monthly, for comparison.
    pub compounded_value: Money,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Naive projection: total contributions times a single `(1 + growth)` factor.
///
/// This is not a compounding simulation; see `plan_contributions` for the
/// compounded figure.
pub fn project_contribution(
    monthly_contribution: Money,
    years: u32,
    annual_growth_rate_percent: Percent,
) -> FinWizResult<Money> {
    if monthly_contribution < Decimal::ZERO {
        return Err(FinWizError::invalid(
            "monthly_contribution",
            "monthly contribution must be >= 0",
        ));
    }

    let total = total_contributed(monthly_contribution, years)?;
    let multiplier = Decimal::ONE + annual_growth_rate_percent / dec!(100);
    time_value::mul("projected_value", total, multiplier)
}

fn total_contributed(monthly_contribution: Money, years: u32) -> FinWizResult<Money> {
    let annual = time_value::mul("monthly_contribution", monthly_contribution, dec!(12))?;
    time_value::mul("monthly_contribution", annual, Decimal::from(years))
}

/// End-of-month contributions compounded at `growth / 12` per month.
pub fn compounded_contribution_value(
    monthly_contribution: Money,
    years: u32,
    annual_growth_rate_percent: Percent,
) -> FinWizResult<Money> {
    let months = years
        .checked_mul(12)
        .ok_or_else(|| FinWizError::invalid("years", "horizon is too long"))?;
    let monthly_rate = annual_growth_rate_percent / dec!(100) / dec!(12);
    time_value::fv(monthly_rate, months, -monthly_contribution, Decimal::ZERO)
}

pub fn plan_contributions(
    input: &ContributionPlan,
) -> FinWizResult<ComputationOutput<ContributionOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let projected_value = project_contribution(
        input.monthly_contribution,
        input.years,
        input.annual_growth_rate_percent,
    )?;
    let compounded_value = compounded_contribution_value(
        input.monthly_contribution,
        input.years,
        input.annual_growth_rate_percent,
    )?;
    let total_contributed = total_contributed(input.monthly_contribution, input.years)?;

    log::debug!(
        "projecting {} a month for {} years at {}%: naive {projected_value}, compounded {compounded_value}",
        input.monthly_contribution,
        input.years,
        input.annual_growth_rate_percent
    );

    warnings.push(
        "projected_value applies one flat growth multiplier to total contributions; \
         compounded_value compounds monthly"
            .into(),
    );
    if input.years == 0 {
        warnings.push("Zero-year horizon; nothing is contributed".into());
    }

    let output = ContributionOutput {
        total_contributed,
        projected_value,
        projected_gain: time_value::sub("projected_gain", projected_value, total_contributed)?,
        compounded_value,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Contribution projection (flat growth multiplier)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dashboard_default_projection() {
        let value = project_contribution(dec!(300), 5, dec!(8)).unwrap();
        assert_eq!(value, dec!(19440));
    }

    #[test]
    fn test_zero_years_projects_zero() {
        let value = project_contribution(dec!(300), 0, dec!(8)).unwrap();
        assert!(value.is_zero());
    }

    #[test]
    fn test_zero_growth_is_sum_of_contributions() {
        let value = project_contribution(dec!(250), 2, Decimal::ZERO).unwrap();
        assert_eq!(value, dec!(6000));
    }

    #[test]
    fn test_negative_contribution_rejected() {
        assert!(project_contribution(dec!(-1), 5, dec!(8)).is_err());
    }

    #[test]
    fn test_huge_contribution_is_error_not_panic() {
        let huge = Decimal::from_scientific("1e27").unwrap();
        let err = project_contribution(huge, 100, dec!(8)).unwrap_err();
        assert!(matches!(err, FinWizError::InvalidInput { .. }));
    }

    #[test]
    fn test_plan_with_overflowing_compounding_is_error() {
        let plan = ContributionPlan {
            monthly_contribution: dec!(300),
            years: 100,
            annual_growth_rate_percent: dec!(500),
        };
        assert!(plan_contributions(&plan).is_err());
    }

    #[test]
    fn test_plan_reports_both_figures() {
        let result = plan_contributions(&ContributionPlan::default()).unwrap();
        let out = &result.result;
        assert_eq!(out.total_contributed, dec!(18000));
        assert_eq!(out.projected_value, dec!(19440));
        assert_eq!(out.projected_gain, dec!(1440));
        // 60 monthly deposits of 300 at 8%/12: ~22,043
        assert!((out.compounded_value - dec!(22043.0)).abs() < dec!(1));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_compounded_zero_rate_equals_total() {
        let value = compounded_contribution_value(dec!(100), 3, Decimal::ZERO).unwrap();
        assert_eq!(value, dec!(3600));
    }
}
