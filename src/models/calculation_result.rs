//! Calculation result models.
//!
//! This module contains the [`Calculation`] type and its associated structures
//! that capture everything a calculator produces: the summary figures, the
//! two-slice breakdown for a proportion chart, the optional schedule and an
//! audit trace of the formulas applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CalculatorKind, SchedulePeriod};

/// One labelled slice of a two-part breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    /// The label shown next to the slice (e.g., "Earnings").
    pub label: String,
    /// The value the slice represents.
    pub value: Decimal,
}

/// A two-part breakdown used to render a proportion chart.
///
/// # Example
///
/// ```
/// use invest_calc::models::Breakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = Breakdown::new(
///     "Total Investment",
///     Decimal::from(120_000),
///     "Earnings",
///     Decimal::from(44_699),
/// );
/// let shares = breakdown.percentages();
/// assert_eq!(shares[0].1, Decimal::new(729, 1));
/// assert_eq!(shares[1].1, Decimal::new(271, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// The two slices, base amount first.
    pub slices: [BreakdownSlice; 2],
}

impl Breakdown {
    /// Creates a breakdown from two labelled values.
    pub fn new(
        first_label: &str,
        first_value: Decimal,
        second_label: &str,
        second_value: Decimal,
    ) -> Self {
        Self {
            slices: [
                BreakdownSlice {
                    label: first_label.to_string(),
                    value: first_value,
                },
                BreakdownSlice {
                    label: second_label.to_string(),
                    value: second_value,
                },
            ],
        }
    }

    /// Returns each slice's share of the total in percent, to one decimal.
    ///
    /// Negative values count as zero. An all-zero breakdown yields zero shares.
    pub fn percentages(&self) -> Vec<(String, Decimal)> {
        let clamped: Vec<Decimal> = self
            .slices
            .iter()
            .map(|s| s.value.max(Decimal::ZERO))
            .collect();
        let total: Decimal = clamped.iter().copied().sum();

        self.slices
            .iter()
            .zip(clamped)
            .map(|(slice, value)| {
                let share = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (value * Decimal::ONE_HUNDRED / total).round_dp(1)
                };
                (slice.label.clone(), share)
            })
            .collect()
    }
}

/// Summary figures of a calculation.
///
/// Every monetary field is rounded to a whole currency unit, and
/// `total_earnings == final_amount - total_invested` holds exactly.
///
/// | calculator | total_invested | final_amount | monthly_amount |
/// |---|---|---|---|
/// | sip | contributions | maturity value | contribution |
/// | step_up_sip | contributions | maturity value | first-year contribution |
/// | swp | principal | maturity value | withdrawal |
/// | goal_sip | contributions | goal | required contribution |
/// | fd | principal | maturity value | none |
/// | emi | loan amount | total payment | installment |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The calculator that produced this result.
    pub calculator: CalculatorKind,
    /// Total amount put in (contributions, principal or loan amount).
    pub total_invested: Decimal,
    /// Gain over the amount put in (earnings, or interest for a loan).
    pub total_earnings: Decimal,
    /// Maturity value, goal amount or total loan payment.
    pub final_amount: Decimal,
    /// The recurring monthly figure, where the calculator has one.
    pub monthly_amount: Option<Decimal>,
    /// Two-slice breakdown for a proportion chart.
    pub breakdown: Breakdown,
}

/// A single step in the audit trace recording one formula stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The identifier of the formula stage.
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The formula evaluated.
    pub formula: String,
    /// The input values for this step.
    pub input: serde_json::Value,
    /// The output values from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation with the figures substituted.
    pub reasoning: String,
}

/// The complete output of one calculator invocation.
///
/// Contains no identifiers or timestamps, so identical inputs always
/// produce identical values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    /// Summary figures.
    pub result: CalculationResult,
    /// Period-by-period schedule in chronological order; empty when the
    /// calculator has none.
    pub schedule: Vec<SchedulePeriod>,
    /// The formula stages applied, in order.
    pub audit_steps: Vec<AuditStep>,
}
