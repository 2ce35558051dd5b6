use finwiz_core::invest::contributions::{self, ContributionPlan};
use finwiz_core::FinWizError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_naive_projection_reference() {
    // 300 a month for 5 years with a flat 8% uplift
    let value = contributions::project_contribution(dec!(300), 5, dec!(8)).unwrap();
    assert_eq!(value, dec!(19440));
}

#[test]
fn test_naive_projection_is_linear_in_years() {
    let one = contributions::project_contribution(dec!(150), 1, dec!(8)).unwrap();
    let ten = contributions::project_contribution(dec!(150), 10, dec!(8)).unwrap();
    assert_eq!(ten, one * dec!(10));
}

#[test]
fn test_compounding_beats_flat_multiplier_over_long_horizons() {
    let plan = ContributionPlan {
        monthly_contribution: dec!(300),
        years: 30,
        annual_growth_rate_percent: dec!(8),
    };
    let result = contributions::plan_contributions(&plan).unwrap();
    assert!(result.result.compounded_value > result.result.projected_value);
}

#[test]
fn test_plan_defaults_growth_when_omitted() {
    let plan: ContributionPlan =
        serde_json::from_str(r#"{"monthly_contribution": "300", "years": 5}"#).unwrap();
    assert_eq!(plan, ContributionPlan::default());
}

#[test]
fn test_zero_year_plan_warns() {
    let plan = ContributionPlan {
        years: 0,
        ..ContributionPlan::default()
    };
    let result = contributions::plan_contributions(&plan).unwrap();
    assert_eq!(result.result.projected_value, Decimal::ZERO);
    assert_eq!(result.result.compounded_value, Decimal::ZERO);
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn test_negative_contribution_is_invalid_input() {
    let plan = ContributionPlan {
        monthly_contribution: dec!(-10),
        ..ContributionPlan::default()
    };
    assert!(matches!(
        contributions::plan_contributions(&plan),
        Err(FinWizError::InvalidInput { .. })
    ));
}
