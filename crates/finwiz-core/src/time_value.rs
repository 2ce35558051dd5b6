use rust_decimal::Decimal;

use crate::error::FinWizError;
use crate::types::{Money, Rate};
use crate::FinWizResult;

// ---------------------------------------------------------------------------
// Checked arithmetic
// ---------------------------------------------------------------------------

// Decimal's operators panic on overflow; these report it against `field`.

pub(crate) fn mul(field: &str, a: Decimal, b: Decimal) -> FinWizResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| FinWizError::overflow(field))
}

pub(crate) fn add(field: &str, a: Decimal, b: Decimal) -> FinWizResult<Decimal> {
    a.checked_add(b).ok_or_else(|| FinWizError::overflow(field))
}

pub(crate) fn sub(field: &str, a: Decimal, b: Decimal) -> FinWizResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| FinWizError::overflow(field))
}

pub(crate) fn div(field: &str, a: Decimal, b: Decimal) -> FinWizResult<Decimal> {
    if b.is_zero() {
        return Err(FinWizError::DivisionByZero {
            context: field.to_string(),
        });
    }
    a.checked_div(b).ok_or_else(|| FinWizError::overflow(field))
}

// ---------------------------------------------------------------------------
// Time value of money
// ---------------------------------------------------------------------------

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> FinWizResult<Decimal> {
    let mut result = Decimal::ONE;
    let factor = add("rate", Decimal::ONE, rate)?;
    for _ in 0..n {
        result = mul("rate", result, factor)?;
    }
    Ok(result)
}

/// Future Value
///
/// Spreadsheet sign convention: money paid in is negative, so saving 100 a
/// period yields a positive future value for `pmt = -100`.
pub fn fv(rate: Rate, nper: u32, pmt: Money, present_value: Money) -> FinWizResult<Money> {
    if rate.is_zero() {
        let paid = mul("pmt", pmt, Decimal::from(nper))?;
        return Ok(-add("present_value", present_value, paid)?);
    }

    let factor = compound(rate, nper)?;
    let annuity_factor = div("rate", factor - Decimal::ONE, rate)?;

    let grown = mul("present_value", present_value, factor)?;
    let annuity = mul("pmt", pmt, annuity_factor)?;
    Ok(-add("fv", grown, annuity)?)
}

/// Payment (PMT)
pub fn pmt(
    rate: Rate,
    nper: u32,
    present_value: Money,
    future_value: Money,
) -> FinWizResult<Money> {
    if nper == 0 {
        return Err(FinWizError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        let total = add("present_value", present_value, future_value)?;
        return Ok(-total / Decimal::from(nper));
    }

    let factor = compound(rate, nper)?;
    let annuity_factor = div("rate", factor - Decimal::ONE, rate)?;

    if annuity_factor.is_zero() {
        return Err(FinWizError::DivisionByZero {
            context: "PMT annuity factor".into(),
        });
    }

    let grown = mul("present_value", present_value, factor)?;
    let owed = add("future_value", grown, future_value)?;
    Ok(-div("pmt", owed, annuity_factor)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_basic() {
        assert_eq!(compound(dec!(0.10), 2).unwrap(), dec!(1.21));
        assert_eq!(compound(dec!(0.05), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_compound_overflow_is_error() {
        // 1.5^200 is far beyond the 96-bit mantissa
        let err = compound(dec!(0.5), 200).unwrap_err();
        assert!(matches!(err, FinWizError::InvalidInput { ref field, .. } if field == "rate"));
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert!(matches!(
            div("x", Decimal::ONE, Decimal::ZERO),
            Err(FinWizError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_checked_mul_overflow() {
        assert!(mul("x", Decimal::MAX, dec!(2)).is_err());
        assert_eq!(mul("x", dec!(3), dec!(4)).unwrap(), dec!(12));
    }

    #[test]
    fn test_pmt_zero_rate() {
        let result = pmt(Decimal::ZERO, 12, dec!(1200), Decimal::ZERO).unwrap();
        assert_eq!(result, dec!(-100));
    }

    #[test]
    fn test_pmt_zero_periods_rejected() {
        assert!(pmt(dec!(0.01), 0, dec!(1000), Decimal::ZERO).is_err());
    }

    #[test]
    fn test_pmt_basic() {
        // 10,000 over 12 months at 1% per month: ~888.49
        let result = pmt(dec!(0.01), 12, dec!(10_000), Decimal::ZERO).unwrap();
        assert!((result + dec!(888.49)).abs() < dec!(0.01));
    }

    #[test]
    fn test_pmt_overflow_is_error() {
        assert!(pmt(dec!(0.9), 120, dec!(5000), Decimal::ZERO).is_err());
    }

    #[test]
    fn test_fv_annuity() {
        // 100 a year for 3 years at 10%: 100 + 110 + 121 = 331
        let result = fv(dec!(0.10), 3, dec!(-100), Decimal::ZERO).unwrap();
        assert_eq!(result, dec!(331));
    }

    #[test]
    fn test_fv_zero_rate() {
        let result = fv(Decimal::ZERO, 10, dec!(-50), Decimal::ZERO).unwrap();
        assert_eq!(result, dec!(500));
    }
}
