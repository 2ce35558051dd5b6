use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use finwiz_core::invest::contributions::{self, ContributionPlan};

use crate::input;

/// Arguments for the contribution planner
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly contribution
    #[arg(long)]
    pub monthly: Option<Decimal>,

    /// Number of years
    #[arg(long)]
    pub years: Option<u32>,

    /// Annual growth in percent
    #[arg(long, default_value_t = dec!(8))]
    pub growth: Decimal,
}

fn plan_from_flags(args: &ProjectArgs) -> Result<ContributionPlan, Box<dyn std::error::Error>> {
    let monthly = args
        .monthly
        .ok_or("--monthly is required (or provide --input)")?;
    let years = args.years.ok_or("--years is required (or provide --input)")?;
    Ok(ContributionPlan {
        monthly_contribution: monthly,
        years,
        annual_growth_rate_percent: args.growth,
    })
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan: ContributionPlan = input::resolve(args.input.as_deref(), || plan_from_flags(&args))?;
    let result = contributions::plan_contributions(&plan)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_args(monthly: Option<Decimal>, years: Option<u32>) -> ProjectArgs {
        ProjectArgs {
            input: None,
            monthly,
            years,
            growth: dec!(8),
        }
    }

    #[test]
    fn test_plan_from_flags() {
        let plan = plan_from_flags(&project_args(Some(dec!(300)), Some(5))).unwrap();
        assert_eq!(plan, ContributionPlan::default());
    }

    #[test]
    fn test_missing_years_reported() {
        let err = plan_from_flags(&project_args(Some(dec!(300)), None)).unwrap_err();
        assert!(err.to_string().contains("--years"));
    }
}
