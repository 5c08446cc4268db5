//! Shared compounding formulas.
//!
//! These helpers keep every intermediate value unrounded; only the reported
//! figures pass through [`round_currency`].

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Converts an annual percentage rate into a monthly fractional rate.
///
/// `r = R / 1200`, so 6.0 % a year becomes 0.005 a month.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::monthly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_rate(Decimal::new(60, 1)), Decimal::new(5, 3));
/// ```
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::from(1200)
}

/// Converts an annual percentage rate into an annual fractional rate.
pub fn annual_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED
}

/// Returns `(1 + rate)^periods`.
///
/// # Returns
///
/// Returns `CalculationError` if the power overflows the decimal range.
pub fn compound_factor(rate: Decimal, periods: u32) -> EngineResult<Decimal> {
    (Decimal::ONE + rate)
        .checked_powi(i64::from(periods))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "compound factor overflowed for rate {} over {} periods",
                rate, periods
            ),
        })
}

/// Returns the annuity-due factor `((1 + r)^n - 1) / r * (1 + r)`.
///
/// This is the future value of one unit paid at the start of each of
/// `periods` periods. `rate` must be non-zero.
pub fn annuity_due_factor(rate: Decimal, periods: u32) -> EngineResult<Decimal> {
    if rate.is_zero() {
        return Err(EngineError::CalculationError {
            message: "annuity factor requires a non-zero rate".to_string(),
        });
    }
    let growth = compound_factor(rate, periods)?;
    Ok((growth - Decimal::ONE) / rate * (Decimal::ONE + rate))
}

/// Rounds a monetary value to a whole currency unit for reporting.
///
/// Exact halves round to the nearest even unit.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Returns the number of months in `years` years.
pub fn months_in(years: u32) -> u32 {
    years * MONTHS_PER_YEAR
}
