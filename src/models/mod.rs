//! Core data models for the investment calculators.
//!
//! This module contains the inputs, results and schedule rows shared by
//! all calculators.

mod calculation_result;
mod currency;
mod display;
mod input;
mod schedule;

pub use calculation_result::{AuditStep, Breakdown, BreakdownSlice, Calculation, CalculationResult};
pub use currency::format_currency;
pub use display::{ResultDisplay, SliceShare};
pub use input::{
    CalculationInput, CalculatorKind, EmiInput, FdInput, GoalSipInput, SipInput, StepUpSipInput,
    SwpInput,
};
pub use schedule::SchedulePeriod;
