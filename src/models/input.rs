//! Calculator input models.
//!
//! Each calculator takes a small record of scalar parameters. Rates are
//! annual percentages (`6.0` means 6 % a year) and durations are whole years.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one of the six calculators.
///
/// # Example
///
/// ```
/// use invest_calc::models::CalculatorKind;
///
/// assert_eq!(CalculatorKind::StepUpSip.id(), "step_up_sip");
/// assert!(CalculatorKind::Emi.has_schedule());
/// assert!(!CalculatorKind::GoalSip.has_schedule());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    /// Fixed monthly investment.
    Sip,
    /// Monthly investment that rises once a year.
    StepUpSip,
    /// Fixed monthly withdrawals from a lump sum.
    Swp,
    /// Monthly investment required to reach a goal.
    GoalSip,
    /// Annually compounded fixed deposit.
    Fd,
    /// Loan repayment installment.
    Emi,
}

impl CalculatorKind {
    /// Returns the snake_case identifier used in JSON and logs.
    pub fn id(&self) -> &'static str {
        match self {
            CalculatorKind::Sip => "sip",
            CalculatorKind::StepUpSip => "step_up_sip",
            CalculatorKind::Swp => "swp",
            CalculatorKind::GoalSip => "goal_sip",
            CalculatorKind::Fd => "fd",
            CalculatorKind::Emi => "emi",
        }
    }

    /// Returns true if the calculator produces a period-by-period schedule.
    pub fn has_schedule(&self) -> bool {
        !matches!(self, CalculatorKind::GoalSip | CalculatorKind::Fd)
    }
}

/// Input for the SIP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipInput {
    /// Amount invested at the start of every month.
    pub monthly_investment: Decimal,
    /// Expected annual return, in percent.
    pub annual_rate: Decimal,
    /// Investment period in years.
    pub years: u32,
}

/// Input for the step-up SIP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepUpSipInput {
    /// Monthly investment during the first year.
    pub monthly_investment: Decimal,
    /// Amount added to the monthly investment at the start of each later year.
    pub annual_increment: Decimal,
    /// Expected annual return, in percent.
    pub annual_rate: Decimal,
    /// Investment period in years.
    pub years: u32,
}

/// Input for the SWP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwpInput {
    /// Lump sum invested up front.
    pub principal: Decimal,
    /// Expected annual return, in percent.
    pub annual_rate: Decimal,
    /// Withdrawal period in years.
    pub years: u32,
    /// Amount withdrawn every month.
    pub monthly_withdrawal: Decimal,
}

/// Input for the goal-based SIP calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSipInput {
    /// Target corpus at the end of the period.
    pub goal_amount: Decimal,
    /// Expected annual return, in percent.
    pub annual_rate: Decimal,
    /// Investment period in years.
    pub years: u32,
}

/// Input for the fixed deposit calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdInput {
    /// Amount deposited.
    pub principal: Decimal,
    /// Annual interest rate, in percent, compounded yearly.
    pub annual_rate: Decimal,
    /// Deposit term in years.
    pub years: u32,
}

/// Input for the EMI calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiInput {
    /// Amount borrowed.
    pub loan_amount: Decimal,
    /// Annual interest rate, in percent.
    pub annual_rate: Decimal,
    /// Loan tenure in years.
    pub tenure_years: u32,
}

/// Input for any calculator, tagged by the `calculator` field.
///
/// # Example
///
/// ```
/// use invest_calc::models::{CalculationInput, CalculatorKind};
///
/// let input: CalculationInput = serde_json::from_str(
///     r#"{"calculator": "fd", "principal": "100000", "annual_rate": "6.0", "years": 5}"#,
/// )
/// .unwrap();
/// assert_eq!(input.kind(), CalculatorKind::Fd);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculationInput {
    /// SIP parameters.
    Sip(SipInput),
    /// Step-up SIP parameters.
    StepUpSip(StepUpSipInput),
    /// SWP parameters.
    Swp(SwpInput),
    /// Goal-based SIP parameters.
    GoalSip(GoalSipInput),
    /// Fixed deposit parameters.
    Fd(FdInput),
    /// EMI parameters.
    Emi(EmiInput),
}

impl CalculationInput {
    /// Returns which calculator this input is for.
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationInput::Sip(_) => CalculatorKind::Sip,
            CalculationInput::StepUpSip(_) => CalculatorKind::StepUpSip,
            CalculationInput::Swp(_) => CalculatorKind::Swp,
            CalculationInput::GoalSip(_) => CalculatorKind::GoalSip,
            CalculationInput::Fd(_) => CalculatorKind::Fd,
            CalculationInput::Emi(_) => CalculatorKind::Emi,
        }
    }
}
