//! SIP (systematic investment plan) calculation.
//!
//! A fixed amount is invested at the start of every month and compounds
//! monthly at `R / 1200`.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, Breakdown, Calculation, CalculationResult, CalculatorKind, SchedulePeriod, SipInput,
};

use super::rates::{annuity_due_factor, monthly_rate, months_in, round_currency};

/// Calculates the maturity value of a monthly SIP.
///
/// `FV = C × ((1 + r)^n − 1) / r × (1 + r)` with `r = R / 1200` and
/// `n = years × 12`, rounded to a whole unit. Earnings are `FV − C × n`.
///
/// The schedule has one row per month, each reporting the final maturity
/// value as the remaining amount.
///
/// # Returns
///
/// Returns `InvalidInput` if any field is outside the configured SIP bounds.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate_sip;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::SipInput;
/// use rust_decimal::Decimal;
///
/// let input = SipInput {
///     monthly_investment: Decimal::from(1000),
///     annual_rate: Decimal::new(60, 1),
///     years: 10,
/// };
/// let calculation = calculate_sip(&input, &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(calculation.result.total_invested, Decimal::from(120_000));
/// assert_eq!(calculation.result.final_amount, Decimal::from(164_699));
/// assert_eq!(calculation.result.total_earnings, Decimal::from(44_699));
/// assert_eq!(calculation.schedule.len(), 120);
/// ```
pub fn calculate_sip(input: &SipInput, config: &CalculatorConfig) -> EngineResult<Calculation> {
    let bounds = &config.bounds.sip;
    bounds
        .monthly_investment
        .check("monthly_investment", input.monthly_investment)?;
    bounds.annual_rate.check("annual_rate", input.annual_rate)?;
    bounds.years.check("years", input.years)?;

    let rate = monthly_rate(input.annual_rate);
    let months = months_in(input.years);
    let factor = annuity_due_factor(rate, months)?;

    let final_amount = round_currency(input.monthly_investment * factor);
    let total_invested = round_currency(input.monthly_investment * Decimal::from(months));
    let total_earnings = final_amount - total_invested;

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "sip_future_value".to_string(),
            rule_name: "SIP Future Value".to_string(),
            formula: "C × ((1 + r)^n − 1) / r × (1 + r)".to_string(),
            input: serde_json::json!({
                "monthly_investment": input.monthly_investment.to_string(),
                "monthly_rate": rate.normalize().to_string(),
                "months": months
            }),
            output: serde_json::json!({
                "annuity_factor": factor.round_dp(6).to_string(),
                "final_amount": final_amount.to_string()
            }),
            reasoning: format!(
                "{} × {} = {} after {} months",
                input.monthly_investment,
                factor.round_dp(6),
                final_amount,
                months
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "sip_earnings".to_string(),
            rule_name: "SIP Earnings".to_string(),
            formula: "FV − C × n".to_string(),
            input: serde_json::json!({
                "final_amount": final_amount.to_string(),
                "total_invested": total_invested.to_string()
            }),
            output: serde_json::json!({
                "total_earnings": total_earnings.to_string()
            }),
            reasoning: format!(
                "{} − {} = {}",
                final_amount, total_invested, total_earnings
            ),
        },
    ];

    // Every row repeats the maturity value rather than a running balance.
    let schedule = (1..=months)
        .map(|month| SchedulePeriod::Balance {
            month,
            remaining: final_amount,
        })
        .collect();

    debug!(
        months,
        final_amount = %final_amount,
        total_earnings = %total_earnings,
        "SIP calculated"
    );

    Ok(Calculation {
        result: CalculationResult {
            calculator: CalculatorKind::Sip,
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
