//! SWP (systematic withdrawal plan) calculation.
//!
//! A lump sum is compounded over the full term, and the schedule then draws a
//! fixed withdrawal from that maturity value every month.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, Breakdown, Calculation, CalculationResult, CalculatorKind, SchedulePeriod, SwpInput,
};

use super::rates::{compound_factor, monthly_rate, months_in, round_currency};

/// Calculates the maturity value and withdrawal schedule of an SWP.
///
/// The maturity value is `M = P × (1 + r)^n`, rounded. Withdrawals do not
/// reduce the compounding base: the schedule starts from `M` and subtracts
/// the withdrawal once per month, never going below zero.
///
/// # Returns
///
/// Returns `InvalidInput` if any field is outside the configured SWP bounds.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate_swp;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::SwpInput;
/// use rust_decimal::Decimal;
///
/// let input = SwpInput {
///     principal: Decimal::from(100_000),
///     annual_rate: Decimal::new(60, 1),
///     years: 5,
///     monthly_withdrawal: Decimal::from(5_000),
/// };
/// let calculation = calculate_swp(&input, &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(calculation.result.final_amount, Decimal::from(134_885));
/// assert_eq!(calculation.schedule[0].balance(), Decimal::from(129_885));
/// assert_eq!(calculation.schedule[59].balance(), Decimal::ZERO);
/// ```
pub fn calculate_swp(input: &SwpInput, config: &CalculatorConfig) -> EngineResult<Calculation> {
    let bounds = &config.bounds.swp;
    bounds.principal.check("principal", input.principal)?;
    bounds.annual_rate.check("annual_rate", input.annual_rate)?;
    bounds.years.check("years", input.years)?;
    bounds
        .monthly_withdrawal
        .check("monthly_withdrawal", input.monthly_withdrawal)?;

    let rate = monthly_rate(input.annual_rate);
    let months = months_in(input.years);
    let growth = compound_factor(rate, months)?;

    let final_amount = round_currency(input.principal * growth);
    let total_invested = round_currency(input.principal);
    let total_earnings = final_amount - total_invested;

    let mut remaining = final_amount;
    let mut depleted_in: Option<u32> = None;
    let mut schedule = Vec::with_capacity(months as usize);
    for month in 1..=months {
        remaining = if remaining > Decimal::ZERO {
            (remaining - input.monthly_withdrawal).max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };
        if remaining.is_zero() && depleted_in.is_none() {
            depleted_in = Some(month);
        }
        schedule.push(SchedulePeriod::Balance { month, remaining });
    }

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "swp_maturity".to_string(),
            rule_name: "SWP Maturity Value".to_string(),
            formula: "P × (1 + r)^n".to_string(),
            input: serde_json::json!({
                "principal": input.principal.to_string(),
                "monthly_rate": rate.normalize().to_string(),
                "months": months
            }),
            output: serde_json::json!({
                "final_amount": final_amount.to_string(),
                "total_earnings": total_earnings.to_string()
            }),
            reasoning: format!(
                "{} × {} = {}",
                input.principal,
                growth.round_dp(6),
                final_amount
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "swp_withdrawals".to_string(),
            rule_name: "SWP Withdrawal Schedule".to_string(),
            formula: "balance = max(balance − W, 0) each month".to_string(),
            input: serde_json::json!({
                "starting_balance": final_amount.to_string(),
                "monthly_withdrawal": input.monthly_withdrawal.to_string(),
                "months": months
            }),
            output: serde_json::json!({
                "ending_balance": remaining.to_string(),
                "depleted_in_month": depleted_in
            }),
            reasoning: match depleted_in {
                Some(month) => format!(
                    "Withdrawing {} a month exhausts {} in month {}",
                    input.monthly_withdrawal, final_amount, month
                ),
                None => format!(
                    "Withdrawing {} a month leaves {} after {} months",
                    input.monthly_withdrawal, remaining, months
                ),
            },
        },
    ];

    debug!(
        months,
        final_amount = %final_amount,
        ending_balance = %remaining,
        "SWP calculated"
    );

    Ok(Calculation {
        result: CalculationResult {
            calculator: CalculatorKind::Swp,
            total_invested,
            total_earnings,
            final_amount,
            monthly_amount: Some(input.monthly_withdrawal),
            breakdown: Breakdown::new(
                "Principal Amount",
                total_invested,
                "Earnings",
                total_earnings,
            ),
        },
        schedule,
        audit_steps,
    })
}
