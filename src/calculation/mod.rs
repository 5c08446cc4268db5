//! Calculation logic for the investment calculators.
//!
//! This module contains one pure function per calculator (SIP, step-up SIP,
//! SWP, goal-based SIP, fixed deposit and EMI) and the shared compounding
//! formulas they are built from. Each function validates its input against
//! the configured bounds and returns a complete [`Calculation`].

mod emi;
mod fd;
mod goal_sip;
mod rates;
mod sip;
mod step_up_sip;
mod swp;

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{Calculation, CalculationInput};

pub use emi::calculate_emi;
pub use fd::calculate_fd;
pub use goal_sip::calculate_goal_sip;
pub use rates::{
    MONTHS_PER_YEAR, annual_rate, annuity_due_factor, compound_factor, monthly_rate, months_in,
    round_currency,
};
pub use sip::calculate_sip;
pub use step_up_sip::calculate_step_up_sip;
pub use swp::calculate_swp;

/// Runs the calculator matching the tagged input.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::{CalculationInput, FdInput};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::Fd(FdInput {
///     principal: Decimal::from(100_000),
///     annual_rate: Decimal::new(60, 1),
///     years: 5,
/// });
/// let calculation = calculate(&input, &CalculatorConfig::default()).unwrap();
/// assert_eq!(calculation.result.final_amount, Decimal::from(133_823));
/// ```
pub fn calculate(input: &CalculationInput, config: &CalculatorConfig) -> EngineResult<Calculation> {
    debug!(calculator = input.kind().id(), "Dispatching calculation");

    match input {
        CalculationInput::Sip(sip) => calculate_sip(sip, config),
        CalculationInput::StepUpSip(step_up) => calculate_step_up_sip(step_up, config),
        CalculationInput::Swp(swp) => calculate_swp(swp, config),
        CalculationInput::GoalSip(goal) => calculate_goal_sip(goal, config),
        CalculationInput::Fd(fd) => calculate_fd(fd, config),
        CalculationInput::Emi(emi) => calculate_emi(emi, config),
    }
}
