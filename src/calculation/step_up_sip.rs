//! Step-up SIP calculation.
//!
//! The monthly investment rises by a fixed increment at the start of each
//! year after the first.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, Breakdown, Calculation, CalculationResult, CalculatorKind, SchedulePeriod,
    StepUpSipInput,
};

use super::rates::{MONTHS_PER_YEAR, annuity_due_factor, monthly_rate, round_currency};

/// Calculates the maturity value of a step-up SIP.
///
/// For each year `i` (0-based) the monthly investment is `C0 + Δ × i` and
/// that year's value is the 12-month annuity-due `Ci × ((1 + r)^12 − 1) / r × (1 + r)`.
/// Yearly values are summed without carrying earlier years' value forward
/// through later years, and the sum is rounded once at the end.
///
/// The schedule has one row per year, and every row repeats the final
/// invested and accumulated totals.
///
/// # Returns
///
/// Returns `InvalidInput` if any field is outside the configured step-up SIP bounds.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate_step_up_sip;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::StepUpSipInput;
/// use rust_decimal::Decimal;
///
/// let input = StepUpSipInput {
///     monthly_investment: Decimal::from(1000),
///     annual_increment: Decimal::from(500),
///     annual_rate: Decimal::new(60, 1),
///     years: 10,
/// };
/// let calculation = calculate_step_up_sip(&input, &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(calculation.result.total_invested, Decimal::from(390_000));
/// assert_eq!(calculation.result.final_amount, Decimal::from(402_910));
/// assert_eq!(calculation.schedule.len(), 10);
/// ```
pub fn calculate_step_up_sip(
    input: &StepUpSipInput,
    config: &CalculatorConfig,
) -> EngineResult<Calculation> {
    let bounds = &config.bounds.step_up_sip;
    bounds
        .monthly_investment
        .check("monthly_investment", input.monthly_investment)?;
    bounds
        .annual_increment
        .check("annual_increment", input.annual_increment)?;
    bounds.annual_rate.check("annual_rate", input.annual_rate)?;
    bounds.years.check("years", input.years)?;

    let rate = monthly_rate(input.annual_rate);
    let year_factor = annuity_due_factor(rate, MONTHS_PER_YEAR)?;
    let months_per_year = Decimal::from(MONTHS_PER_YEAR);

    let mut running_investment = Decimal::ZERO;
    let mut running_amount = Decimal::ZERO;

    for i in 0..input.years {
        let yearly_investment = input.monthly_investment + input.annual_increment * Decimal::from(i);
        running_investment += yearly_investment * months_per_year;
        running_amount += yearly_investment * year_factor;
    }

    let last_monthly_investment =
        input.monthly_investment + input.annual_increment * Decimal::from(input.years.saturating_sub(1));
    let total_invested = round_currency(running_investment);
    let final_amount = round_currency(running_amount);
    let total_earnings = final_amount - total_invested;

    // Every row carries the final totals, matching the downloadable table.
    let schedule = (1..=input.years)
        .map(|year| SchedulePeriod::Accumulation {
            year,
            investment: total_invested,
            amount: final_amount,
        })
        .collect();

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "step_up_yearly_factor".to_string(),
            rule_name: "Step-up Yearly Annuity Factor".to_string(),
            formula: "((1 + r)^12 − 1) / r × (1 + r)".to_string(),
            input: serde_json::json!({
                "monthly_rate": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "year_factor": year_factor.round_dp(6).to_string()
            }),
            reasoning: format!(
                "Each year's contribution grows by a factor of {} within that year",
                year_factor.round_dp(6)
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "step_up_accumulation".to_string(),
            rule_name: "Step-up Accumulation".to_string(),
            formula: "Σ (C0 + Δ × i) × year_factor, i = 0..Y−1".to_string(),
            input: serde_json::json!({
                "monthly_investment": input.monthly_investment.to_string(),
                "annual_increment": input.annual_increment.to_string(),
                "years": input.years
            }),
            output: serde_json::json!({
                "total_invested": total_invested.to_string(),
                "final_amount": final_amount.to_string(),
                "total_earnings": total_earnings.to_string()
            }),
            reasoning: format!(
                "Monthly investment rises from {} to {} over {} years, investing {} for a final amount of {}",
                input.monthly_investment,
                last_monthly_investment,
                input.years,
                total_invested,
                final_amount
            ),
        },
    ];

    debug!(
        years = input.years,
        final_amount = %final_amount,
        total_earnings = %total_earnings,
        "Step-up SIP calculated"
    );

    Ok(Calculation {
        result: CalculationResult {
            calculator: CalculatorKind::StepUpSip,
            total_invested,
            total_earnings,
            final_amount,
            monthly_amount: Some(input.monthly_investment),
            breakdown: Breakdown::new(
                "Total Investment",
                total_invested,
                "Earnings",
                total_earnings,
            ),
        },
        schedule,
        audit_steps,
    })
}
