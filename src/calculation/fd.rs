//! Fixed deposit calculation.
//!
//! Unlike the other calculators, a fixed deposit compounds once a year.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, Breakdown, Calculation, CalculationResult, CalculatorKind, FdInput};

use super::rates::{annual_rate, compound_factor, round_currency};

/// Calculates the maturity value of a fixed deposit.
///
/// `maturity = P × (1 + R / 100)^Y`, rounded. Earnings are `maturity − P`.
/// No schedule is produced.
///
/// # Returns
///
/// Returns `InvalidInput` if any field is outside the configured FD bounds.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate_fd;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::FdInput;
/// use rust_decimal::Decimal;
///
/// let input = FdInput {
///     principal: Decimal::from(100_000),
///     annual_rate: Decimal::new(60, 1),
///     years: 5,
/// };
/// let calculation = calculate_fd(&input, &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(calculation.result.final_amount, Decimal::from(133_823));
/// assert_eq!(calculation.result.total_earnings, Decimal::from(33_823));
/// ```
pub fn calculate_fd(input: &FdInput, config: &CalculatorConfig) -> EngineResult<Calculation> {
    let bounds = &config.bounds.fd;
    bounds.principal.check("principal", input.principal)?;
    bounds.annual_rate.check("annual_rate", input.annual_rate)?;
    bounds.years.check("years", input.years)?;

    let rate = annual_rate(input.annual_rate);
    let growth = compound_factor(rate, input.years)?;

    let final_amount = round_currency(input.principal * growth);
    let total_invested = round_currency(input.principal);
    let total_earnings = final_amount - total_invested;

    let audit_steps = vec![AuditStep {
        step_number: 1,
        rule_id: "fd_maturity".to_string(),
        rule_name: "FD Maturity Value".to_string(),
        formula: "P × (1 + R / 100)^Y".to_string(),
        input: serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate": rate.normalize().to_string(),
            "years": input.years
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
    }];

    debug!(
        years = input.years,
        final_amount = %final_amount,
        "FD calculated"
    );

    Ok(Calculation {
        result: CalculationResult {
            calculator: CalculatorKind::Fd,
            total_invested,
            total_earnings,
            final_amount,
            monthly_amount: None,
            breakdown: Breakdown::new(
                "Principal Amount",
                total_invested,
                "Earnings",
                total_earnings,
            ),
        },
        schedule: Vec::new(),
        audit_steps,
    })
}
