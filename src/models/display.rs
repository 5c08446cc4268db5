//! Display-ready figures for a calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculation_result::CalculationResult;
use super::currency::format_currency;

/// One breakdown slice as a percentage of the whole, for chart labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceShare {
    /// Slice label, e.g. "Earnings".
    pub label: String,
    /// Share of the total in percent, to one decimal place.
    pub percent: Decimal,
}

/// Summary figures formatted in the configured currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDisplay {
    /// Formatted amount invested (or loan principal).
    pub total_invested: String,
    /// Formatted earnings (or total interest).
    pub total_earnings: String,
    /// Formatted final amount.
    pub final_amount: String,
    /// Formatted monthly amount, when the calculator has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_amount: Option<String>,
    /// Breakdown shares in slice order.
    pub shares: Vec<SliceShare>,
}

impl ResultDisplay {
    /// Formats a result with the given currency symbol.
    ///
    /// # Example
    ///
    /// ```
    /// use invest_calc::models::{Breakdown, CalculationResult, CalculatorKind, ResultDisplay};
    /// use rust_decimal::Decimal;
    ///
    /// let result = CalculationResult {
    ///     calculator: CalculatorKind::Fd,
    ///     total_invested: Decimal::from(100_000),
    ///     total_earnings: Decimal::from(33_823),
    ///     final_amount: Decimal::from(133_823),
    ///     monthly_amount: None,
    ///     breakdown: Breakdown::new(
    ///         "Principal Amount",
    ///         Decimal::from(100_000),
    ///         "Earnings",
    ///         Decimal::from(33_823),
    ///     ),
    /// };
    /// let display = ResultDisplay::from_result(&result, "₹");
    ///
    /// assert_eq!(display.final_amount, "₹133,823");
    /// assert_eq!(display.shares[0].percent, Decimal::new(747, 1));
    /// ```
    pub fn from_result(result: &CalculationResult, symbol: &str) -> Self {
        Self {
            total_invested: format_currency(result.total_invested, symbol),
            total_earnings: format_currency(result.total_earnings, symbol),
            final_amount: format_currency(result.final_amount, symbol),
            monthly_amount: result
                .monthly_amount
                .map(|amount| format_currency(amount, symbol)),
            shares: result
                .breakdown
                .percentages()
                .into_iter()
                .map(|(label, percent)| SliceShare { label, percent })
                .collect(),
        }
    }
}
