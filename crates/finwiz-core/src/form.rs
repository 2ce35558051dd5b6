//! Text and float coercion for calculator inputs.
//!
//! Form fields arrive as strings (or `f64` from JavaScript). Bad text
//! becomes zero here so the engines only ever see well-formed values.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FinWizError;
use crate::FinWizResult;

#[cfg(feature = "borrow")]
use crate::borrow::amortization::LoanParameters;
#[cfg(feature = "borrow")]
use crate::types::{Money, Percent};
#[cfg(feature = "borrow")]
use rust_decimal::prelude::ToPrimitive;
#[cfg(feature = "borrow")]
use rust_decimal_macros::dec;

/// Parse a form field, treating empty or unparsable text as zero.
pub fn coerce_number(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Convert a float from a host environment, rejecting NaN and infinities.
pub fn decimal_from_f64(field: &str, value: f64) -> FinWizResult<Decimal> {
    if !value.is_finite() {
        return Err(FinWizError::invalid(field, "value must be a finite number"));
    }
    Decimal::try_from(value).map_err(|e| FinWizError::invalid(field, e.to_string()))
}

/// Ranges of the Borrow tab's sliders.
///
/// Only slider positions are clamped; typed text goes through `LoanForm`,
/// which coerces but accepts any amount >= 0 and any term >= 1.
#[cfg(feature = "borrow")]
#[derive(Debug, Clone, PartialEq)]
pub struct LoanLimits {
    pub min_amount: Money,
    pub max_amount: Money,
    pub min_rate_percent: Percent,
    pub max_rate_percent: Percent,
    pub min_term_months: u32,
    pub max_term_months: u32,
}

#[cfg(feature = "borrow")]
impl Default for LoanLimits {
    fn default() -> Self {
        LoanLimits {
            min_amount: dec!(1000),
            max_amount: dec!(50000),
            min_rate_percent: Decimal::ZERO,
            max_rate_percent: dec!(25),
            min_term_months: 6,
            max_term_months: 84,
        }
    }
}

#[cfg(feature = "borrow")]
impl LoanLimits {
    pub fn clamp(&self, params: &LoanParameters) -> LoanParameters {
        LoanParameters {
            principal: params.principal.clamp(self.min_amount, self.max_amount),
            annual_rate_percent: params
                .annual_rate_percent
                .clamp(self.min_rate_percent, self.max_rate_percent),
            term_months: params
                .term_months
                .clamp(self.min_term_months, self.max_term_months),
        }
    }

    /// Parameters from raw slider positions, clamped into range.
    pub fn from_sliders(&self, amount: f64, apr: f64, term: u32) -> FinWizResult<LoanParameters> {
        let params = LoanParameters {
            principal: decimal_from_f64("principal", amount)?,
            annual_rate_percent: decimal_from_f64("annual_rate_percent", apr)?,
            term_months: term,
        };
        Ok(self.clamp(&params))
    }
}

/// The three calculator text boxes.
#[cfg(feature = "borrow")]
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub amount: String,
    pub apr: String,
    pub term: String,
}

#[cfg(feature = "borrow")]
impl LoanForm {
    pub fn from_text(amount: &str, apr: &str, term: &str) -> Self {
        LoanForm {
            amount: amount.to_string(),
            apr: apr.to_string(),
            term: term.to_string(),
        }
    }

    /// Amount and APR fall back to 0, term falls back to 1 month.
    pub fn to_parameters(&self) -> LoanParameters {
        let principal = coerce_number(&self.amount).max(Decimal::ZERO);
        let annual_rate_percent = coerce_number(&self.apr).max(Decimal::ZERO);
        let term_months = coerce_number(&self.term)
            .trunc()
            .to_u32()
            .unwrap_or(0)
            .max(1);

        LoanParameters {
            principal,
            annual_rate_percent,
            term_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_coerce_plain_and_padded() {
        assert_eq!(coerce_number("5000"), dec!(5000));
        assert_eq!(coerce_number("  8.9 "), dec!(8.9));
    }

    #[test]
    fn test_coerce_bad_text_is_zero() {
        assert_eq!(coerce_number(""), Decimal::ZERO);
        assert_eq!(coerce_number("abc"), Decimal::ZERO);
        assert_eq!(coerce_number("NaN"), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_scientific() {
        assert_eq!(coerce_number("5e3"), dec!(5000));
    }

    #[test]
    fn test_decimal_from_f64_rejects_non_finite() {
        assert!(decimal_from_f64("principal", f64::NAN).is_err());
        assert!(decimal_from_f64("principal", f64::INFINITY).is_err());
        assert_eq!(decimal_from_f64("principal", 1200.0).unwrap(), dec!(1200));
    }

    #[cfg(feature = "borrow")]
    #[test]
    fn test_form_defaults_bad_fields() {
        let params = LoanForm::from_text("lots", "", "").to_parameters();
        assert_eq!(params.principal, Decimal::ZERO);
        assert_eq!(params.annual_rate_percent, Decimal::ZERO);
        assert_eq!(params.term_months, 1);
    }

    #[cfg(feature = "borrow")]
    #[test]
    fn test_form_clamps_negatives() {
        let params = LoanForm::from_text("-500", "-3", "-12").to_parameters();
        assert_eq!(params.principal, Decimal::ZERO);
        assert_eq!(params.annual_rate_percent, Decimal::ZERO);
        assert_eq!(params.term_months, 1);
    }

    #[cfg(feature = "borrow")]
    #[test]
    fn test_form_truncates_fractional_term() {
        let params = LoanForm::from_text("5000", "8.9", "36.7").to_parameters();
        assert_eq!(params.term_months, 36);
        assert_eq!(params, LoanParameters::default());
    }

    #[cfg(feature = "borrow")]
    #[test]
    fn test_limits_clamp_to_slider_range() {
        let limits = LoanLimits::default();
        let clamped = limits.clamp(&LoanParameters {
            principal: dec!(100_000),
            annual_rate_percent: dec!(40),
            term_months: 1,
        });
        assert_eq!(clamped.principal, dec!(50000));
        assert_eq!(clamped.annual_rate_percent, dec!(25));
        assert_eq!(clamped.term_months, 6);
    }

    #[cfg(feature = "borrow")]
    #[test]
    fn test_sliders_reject_nan() {
        let limits = LoanLimits::default();
        assert!(limits.from_sliders(f64::NAN, 8.9, 36).is_err());
        let params = limits.from_sliders(500.0, 8.9, 3).unwrap();
        assert_eq!(params.principal, dec!(1000));
        assert_eq!(params.term_months, 6);
    }

    #[cfg(feature = "borrow")]
    #[test]
    fn test_typed_text_is_not_clamped_to_sliders() {
        let params = LoanForm::from_text("500", "8.9", "3").to_parameters();
        assert_eq!(params.principal, dec!(500));
        assert_eq!(params.term_months, 3);
    }
}
