//! Goal-based SIP calculation.
//!
//! The inverse of the SIP calculation: the monthly investment needed to
//! reach a target amount.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, Breakdown, Calculation, CalculationResult, CalculatorKind, GoalSipInput,
};

use super::rates::{annuity_due_factor, monthly_rate, months_in, round_currency};

/// Calculates the monthly investment required to reach a goal.
///
/// `S = G / (((1 + r)^n − 1) / r × (1 + r))`, rounded to a whole unit.
/// The result reports `S × n` as the amount invested and the goal as the
/// final amount. No schedule is produced.
///
/// # Returns
///
/// Returns `InvalidInput` if any field is outside the configured goal SIP bounds.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate_goal_sip;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::GoalSipInput;
/// use rust_decimal::Decimal;
///
/// let input = GoalSipInput {
///     goal_amount: Decimal::from(500_000),
///     annual_rate: Decimal::new(60, 1),
///     years: 10,
/// };
/// let calculation = calculate_goal_sip(&input, &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(calculation.result.monthly_amount, Some(Decimal::from(3_036)));
/// assert!(calculation.schedule.is_empty());
/// ```
pub fn calculate_goal_sip(
    input: &GoalSipInput,
    config: &CalculatorConfig,
) -> EngineResult<Calculation> {
    let bounds = &config.bounds.goal_sip;
    bounds.goal_amount.check("goal_amount", input.goal_amount)?;
    bounds.annual_rate.check("annual_rate", input.annual_rate)?;
    bounds.years.check("years", input.years)?;

    let rate = monthly_rate(input.annual_rate);
    let months = months_in(input.years);
    let factor = annuity_due_factor(rate, months)?;

    let required_sip = round_currency(input.goal_amount / factor);
    let total_invested = required_sip * Decimal::from(months);
    let final_amount = round_currency(input.goal_amount);
    let total_earnings = final_amount - total_invested;

    let audit_steps = vec![AuditStep {
        step_number: 1,
        rule_id: "goal_required_sip".to_string(),
        rule_name: "Goal Required SIP".to_string(),
        formula: "G / (((1 + r)^n − 1) / r × (1 + r))".to_string(),
        input: serde_json::json!({
            "goal_amount": input.goal_amount.to_string(),
            "monthly_rate": rate.normalize().to_string(),
            "months": months
        }),
        output: serde_json::json!({
            "annuity_factor": factor.round_dp(6).to_string(),
            "required_sip": required_sip.to_string(),
            "total_invested": total_invested.to_string()
        }),
        reasoning: format!(
            "{} / {} = {} a month for {} months",
            input.goal_amount,
            factor.round_dp(6),
            required_sip,
            months
        ),
    }];

    debug!(
        months,
        required_sip = %required_sip,
        "Goal SIP calculated"
    );

    Ok(Calculation {
        result: CalculationResult {
            calculator: CalculatorKind::GoalSip,
            total_invested,
            total_earnings,
            final_amount,
            monthly_amount: Some(required_sip),
            breakdown: Breakdown::new(
                "Goal Amount",
                final_amount,
                "SIP Investment",
                total_invested,
            ),
        },
        schedule: Vec::new(),
        audit_steps,
    })
}
