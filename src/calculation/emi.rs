//! EMI (equated monthly installment) calculation.
//!
//! This module computes the fixed installment that repays a loan and walks
//! the month-by-month amortization schedule.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, Breakdown, Calculation, CalculationResult, CalculatorKind, EmiInput, SchedulePeriod,
};

use super::rates::{compound_factor, monthly_rate, months_in, round_currency};

/// Calculates the installment, totals and amortization schedule of a loan.
///
/// `EMI = L × r × (1 + r)^n / ((1 + r)^n − 1)`, rounded. The total payment is
/// `EMI × n` and the total interest is `EMI × n − L`.
///
/// The schedule carries the unrounded outstanding principal from month to
/// month. Each month the interest is `outstanding × r` and the rest of the
/// installment repays principal. The final month (or any month where the
/// installment would overpay) repays exactly what is left, absorbing the
/// rounding of the EMI. Reported principal is the drop in the rounded
/// outstanding balance, so the reported principal always sums to the loan
/// amount and the last outstanding balance is zero.
///
/// Because the final month settles the balance instead of paying the rounded
/// EMI, the payments in the schedule can sum to slightly more or less than
/// `final_amount`, which stays at `EMI × n`.
///
/// # Returns
///
/// Returns `InvalidInput` if any field is outside the configured EMI bounds.
///
/// # Examples
///
/// ```
/// use invest_calc::calculation::calculate_emi;
/// use invest_calc::config::CalculatorConfig;
/// use invest_calc::models::EmiInput;
/// use rust_decimal::Decimal;
///
/// let input = EmiInput {
///     loan_amount: Decimal::from(500_000),
///     annual_rate: Decimal::new(80, 1),
///     tenure_years: 10,
/// };
/// let calculation = calculate_emi(&input, &CalculatorConfig::default()).unwrap();
///
/// assert_eq!(calculation.result.monthly_amount, Some(Decimal::from(6_066)));
/// assert_eq!(calculation.result.final_amount, Decimal::from(727_920));
/// assert_eq!(calculation.result.total_earnings, Decimal::from(227_920));
/// assert_eq!(calculation.schedule.len(), 120);
/// ```
pub fn calculate_emi(input: &EmiInput, config: &CalculatorConfig) -> EngineResult<Calculation> {
    let bounds = &config.bounds.emi;
    bounds.loan_amount.check("loan_amount", input.loan_amount)?;
    bounds.annual_rate.check("annual_rate", input.annual_rate)?;
    bounds.tenure_years.check("tenure_years", input.tenure_years)?;

    let rate = monthly_rate(input.annual_rate);
    let months = months_in(input.tenure_years);
    let growth = compound_factor(rate, months)?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        return Err(EngineError::CalculationError {
            message: "installment denominator is zero".to_string(),
        });
    }

    let emi = round_currency(input.loan_amount * rate * growth / denominator);
    let total_invested = round_currency(input.loan_amount);
    let final_amount = emi * Decimal::from(months);
    let total_earnings = final_amount - total_invested;

    let schedule = amortize(input.loan_amount, rate, emi, months);

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "emi_installment".to_string(),
            rule_name: "EMI Installment".to_string(),
            formula: "L × r × (1 + r)^n / ((1 + r)^n − 1)".to_string(),
            input: serde_json::json!({
                "loan_amount": input.loan_amount.to_string(),
                "monthly_rate": rate.round_dp(10).normalize().to_string(),
                "months": months
            }),
            output: serde_json::json!({
                "emi": emi.to_string()
            }),
            reasoning: format!(
                "A loan of {} over {} months needs an installment of {}",
                input.loan_amount, months, emi
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "emi_totals".to_string(),
            rule_name: "EMI Totals".to_string(),
            formula: "EMI × n − L".to_string(),
            input: serde_json::json!({
                "emi": emi.to_string(),
                "months": months,
                "loan_amount": total_invested.to_string()
            }),
            output: serde_json::json!({
                "total_payment": final_amount.to_string(),
                "total_interest": total_earnings.to_string()
            }),
            reasoning: format!(
                "{} × {} = {} paid, of which {} is interest",
                emi, months, final_amount, total_earnings
            ),
        },
    ];

    debug!(
        months,
        emi = %emi,
        total_interest = %total_earnings,
        "EMI calculated"
    );

    Ok(Calculation {
        result: CalculationResult {
            calculator: CalculatorKind::Emi,
            total_invested,
            total_earnings,
            final_amount,
            monthly_amount: Some(emi),
            breakdown: Breakdown::new(
                "Principal Amount",
                total_invested,
                "Total Interest",
                total_earnings,
            ),
        },
        schedule,
        audit_steps,
    })
}

/// Walks the loan month by month, carrying the unrounded balance.
fn amortize(loan_amount: Decimal, rate: Decimal, emi: Decimal, months: u32) -> Vec<SchedulePeriod> {
    let mut outstanding = loan_amount;
    let mut reported_outstanding = round_currency(loan_amount);
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let interest = outstanding * rate;
        let mut principal = emi - interest;
        if month == months || principal >= outstanding {
            principal = outstanding;
        }
        outstanding = (outstanding - principal).max(Decimal::ZERO);

        let reported = round_currency(outstanding);
        schedule.push(SchedulePeriod::Amortization {
            month,
            principal_paid: reported_outstanding - reported,
            interest_paid: round_currency(interest),
            outstanding: reported,
        });
        reported_outstanding = reported;
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn emi(loan: &str, rate: &str, years: u32) -> EmiInput {
        EmiInput {
            loan_amount: dec(loan),
            annual_rate: dec(rate),
            tenure_years: years,
        }
    }

    fn amortization(row: &SchedulePeriod) -> (u32, Decimal, Decimal, Decimal) {
        match row {
            SchedulePeriod::Amortization {
                month,
                principal_paid,
                interest_paid,
                outstanding,
            } => (*month, *principal_paid, *interest_paid, *outstanding),
            other => panic!("Expected Amortization row, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_ten_year_loan_at_eight_percent() {
        let calc = calculate_emi(&emi("500000", "8.0", 10), &CalculatorConfig::default()).unwrap();

        assert_eq!(calc.result.calculator, CalculatorKind::Emi);
        assert_eq!(calc.result.monthly_amount, Some(dec("6066")));
        assert_eq!(calc.result.total_invested, dec("500000"));
        assert_eq!(calc.result.final_amount, dec("727920"));
        assert_eq!(calc.result.total_earnings, dec("227920"));
    }

    #[test]
    fn test_reference_twenty_year_loan_at_nine_percent() {
        let calc = calculate_emi(&emi("1000000", "9", 20), &CalculatorConfig::default()).unwrap();

        assert_eq!(calc.result.monthly_amount, Some(dec("8997")));
        assert_eq!(calc.result.final_amount, dec("2159280"));
        assert_eq!(calc.result.total_earnings, dec("1159280"));
    }

    #[test]
    fn test_first_rows_of_schedule() {
        let calc = calculate_emi(&emi("500000", "8.0", 10), &CalculatorConfig::default()).unwrap();

        assert_eq!(
            amortization(&calc.schedule[0]),
            (1, dec("2733"), dec("3333"), dec("497267"))
        );
        assert_eq!(
            amortization(&calc.schedule[1]),
            (2, dec("2751"), dec("3315"), dec("494516"))
        );
    }

    #[test]
    fn test_final_installment_settles_the_balance() {
        let calc = calculate_emi(&emi("500000", "8.0", 10), &CalculatorConfig::default()).unwrap();

        assert_eq!(
            amortization(&calc.schedule[118]),
            (119, dec("5985"), dec("81"), dec("6095"))
        );
        assert_eq!(
            amortization(&calc.schedule[119]),
            (120, dec("6095"), dec("41"), Decimal::ZERO)
        );
    }

    #[test]
    fn test_schedule_payments_differ_from_quoted_total() {
        let calc = calculate_emi(&emi("500000", "8.0", 10), &CalculatorConfig::default()).unwrap();

        let paid: Decimal = calc
            .schedule
            .iter()
            .map(|row| {
                let (_, principal, interest, _) = amortization(row);
                principal + interest
            })
            .sum();
        assert_eq!(calc.result.final_amount, dec("727920"));
        assert_eq!(paid, dec("727995"));
        assert_eq!(calc.schedule.last().unwrap().balance(), Decimal::ZERO);
    }

    #[test]
    fn test_principal_paid_sums_to_loan_amount() {
        for (loan, rate, years) in [("500000", "8.0", 10), ("100000", "12", 1), ("5000000", "15", 30)] {
            let calc = calculate_emi(&emi(loan, rate, years), &CalculatorConfig::default()).unwrap();

            let total_principal: Decimal = calc
                .schedule
                .iter()
                .map(|row| amortization(row).1)
                .sum();
            assert!((total_principal - dec(loan)).abs() <= Decimal::ONE);
            assert_eq!(calc.schedule.last().unwrap().balance(), Decimal::ZERO);
        }
    }

    #[test]
    fn test_outstanding_never_increases() {
        let calc = calculate_emi(&emi("750000", "10.5", 15), &CalculatorConfig::default()).unwrap();

        let mut previous = dec("750000");
        for row in &calc.schedule {
            let (_, principal, interest, outstanding) = amortization(row);
            assert!(outstanding <= previous);
            assert!(principal >= Decimal::ZERO);
            assert!(interest >= Decimal::ZERO);
            previous = outstanding;
        }
    }

    #[test]
    fn test_interest_falls_as_principal_is_repaid() {
        let calc = calculate_emi(&emi("100000", "12", 1), &CalculatorConfig::default()).unwrap();

        let first = amortization(&calc.schedule[0]);
        let last = amortization(&calc.schedule[11]);
        assert_eq!(first, (1, dec("7885"), dec("1000"), dec("92115")));
        assert_eq!(last, (12, dec("8796"), dec("88"), Decimal::ZERO));
    }

    #[test]
    fn test_breakdown_is_principal_vs_interest() {
        let calc = calculate_emi(&emi("500000", "8.0", 10), &CalculatorConfig::default()).unwrap();
        let slices = &calc.result.breakdown.slices;

        assert_eq!(slices[0].label, "Principal Amount");
        assert_eq!(slices[1].label, "Total Interest");
        assert_eq!(slices[1].value, dec("227920"));
    }

    #[test]
    fn test_tenure_above_maximum_is_rejected() {
        let result = calculate_emi(&emi("500000", "8.0", 31), &CalculatorConfig::default());

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "tenure_years"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_is_rejected_before_dividing() {
        let result = calculate_emi(&emi("500000", "0", 10), &CalculatorConfig::default());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }
}
