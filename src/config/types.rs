//! Configuration types for the calculators.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML bounds file.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive `[min, max]` range an input value must fall within.
///
/// # Example
///
/// ```
/// use invest_calc::config::Bounds;
///
/// let years = Bounds::new(1u32, 30u32);
/// assert!(years.check("years", 10).is_ok());
/// assert!(years.check("years", 31).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    /// The smallest accepted value.
    pub min: T,
    /// The largest accepted value.
    pub max: T,
}

impl<T: PartialOrd + Display + Copy> Bounds<T> {
    /// Creates a new inclusive range.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the range (inclusive).
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks `value` against the range.
    ///
    /// Returns `InvalidInput` naming `field` when the value is out of range.
    /// Values are never clamped.
    pub fn check(&self, field: &str, value: T) -> EngineResult<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    self.min, self.max, value
                ),
            })
        }
    }
}

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// The symbol prefixed to formatted amounts (e.g., "₹").
    pub symbol: String,
}

/// Bounds for the SIP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipBounds {
    /// Monthly investment range.
    pub monthly_investment: Bounds<Decimal>,
    /// Annual rate range, in percent.
    pub annual_rate: Bounds<Decimal>,
    /// Investment period range, in years.
    pub years: Bounds<u32>,
}

/// Bounds for the step-up SIP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepUpSipBounds {
    /// Initial monthly investment range.
    pub monthly_investment: Bounds<Decimal>,
    /// Yearly increase of the monthly investment.
    pub annual_increment: Bounds<Decimal>,
    /// Annual rate range, in percent.
    pub annual_rate: Bounds<Decimal>,
    /// Investment period range, in years.
    pub years: Bounds<u32>,
}

/// Bounds for the SWP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwpBounds {
    /// Lump sum range.
    pub principal: Bounds<Decimal>,
    /// Annual rate range, in percent.
    pub annual_rate: Bounds<Decimal>,
    /// Withdrawal period range, in years.
    pub years: Bounds<u32>,
    /// Monthly withdrawal range.
    pub monthly_withdrawal: Bounds<Decimal>,
}

/// Bounds for the goal-based SIP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSipBounds {
    /// Target amount range.
    pub goal_amount: Bounds<Decimal>,
    /// Annual rate range, in percent.
    pub annual_rate: Bounds<Decimal>,
    /// Investment period range, in years.
    pub years: Bounds<u32>,
}

/// Bounds for the fixed deposit calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdBounds {
    /// Deposit range.
    pub principal: Bounds<Decimal>,
    /// Annual rate range, in percent.
    pub annual_rate: Bounds<Decimal>,
    /// Deposit term range, in years.
    pub years: Bounds<u32>,
}

/// Bounds for the EMI calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiBounds {
    /// Loan amount range.
    pub loan_amount: Bounds<Decimal>,
    /// Annual interest rate range, in percent.
    pub annual_rate: Bounds<Decimal>,
    /// Loan tenure range, in years.
    pub tenure_years: Bounds<u32>,
}

/// Per-calculator input bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorBounds {
    /// SIP bounds.
    pub sip: SipBounds,
    /// Step-up SIP bounds.
    pub step_up_sip: StepUpSipBounds,
    /// SWP bounds.
    pub swp: SwpBounds,
    /// Goal-based SIP bounds.
    pub goal_sip: GoalSipBounds,
    /// Fixed deposit bounds.
    pub fd: FdBounds,
    /// EMI bounds.
    pub emi: EmiBounds,
}

/// The complete calculator configuration.
///
/// Process-wide and read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Currency display settings.
    pub currency: CurrencyConfig,
    /// Input bounds per calculator.
    pub bounds: CalculatorBounds,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        let monthly = Bounds::new(Decimal::from(500), Decimal::from(50_000));
        let lump = Bounds::new(Decimal::from(10_000), Decimal::from(5_000_000));
        let rate = Bounds::new(Decimal::new(1, 1), Decimal::new(150, 1));
        let years = Bounds::new(1, 30);

        Self {
            currency: CurrencyConfig {
                symbol: "₹".to_string(),
            },
            bounds: CalculatorBounds {
                sip: SipBounds {
                    monthly_investment: monthly,
                    annual_rate: rate,
                    years,
                },
                step_up_sip: StepUpSipBounds {
                    monthly_investment: monthly,
                    annual_increment: Bounds::new(Decimal::ZERO, Decimal::from(10_000)),
                    annual_rate: rate,
                    years,
                },
                swp: SwpBounds {
                    principal: lump,
                    annual_rate: rate,
                    years,
                    monthly_withdrawal: monthly,
                },
                goal_sip: GoalSipBounds {
                    goal_amount: Bounds::new(Decimal::from(10_000), Decimal::from(10_000_000)),
                    annual_rate: rate,
                    years,
                },
                fd: FdBounds {
                    principal: lump,
                    annual_rate: rate,
                    years: Bounds::new(1, 10),
                },
                emi: EmiBounds {
                    loan_amount: lump,
                    annual_rate: rate,
                    tenure_years: years,
                },
            },
        }
    }
}
