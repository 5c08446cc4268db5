//! Schedule period models.
//!
//! A schedule is an ordered `Vec<SchedulePeriod>`, one entry per period from
//! 1 to the period count, in chronological order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a calculator's time series.
///
/// # Example
///
/// ```
/// use invest_calc::models::SchedulePeriod;
/// use rust_decimal::Decimal;
///
/// let row = SchedulePeriod::Balance { month: 3, remaining: Decimal::from(119_885) };
/// assert_eq!(row.period(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulePeriod {
    /// A monthly balance (SIP and SWP schedules).
    Balance {
        /// Month index, starting at 1.
        month: u32,
        /// Amount remaining at the end of the month.
        remaining: Decimal,
    },
    /// One year of a step-up SIP schedule, carrying the plan's final totals.
    Accumulation {
        /// Year index, starting at 1.
        year: u32,
        /// Total contributed over the whole plan.
        investment: Decimal,
        /// Final accumulated value of the whole plan.
        amount: Decimal,
    },
    /// One month of a loan amortization (EMI schedule).
    Amortization {
        /// Month index, starting at 1.
        month: u32,
        /// Principal repaid this month.
        principal_paid: Decimal,
        /// Interest paid this month.
        interest_paid: Decimal,
        /// Principal still owed after this month's payment.
        outstanding: Decimal,
    },
}

impl SchedulePeriod {
    /// Returns the period index (month or year) of this row.
    pub fn period(&self) -> u32 {
        match self {
            SchedulePeriod::Balance { month, .. } => *month,
            SchedulePeriod::Accumulation { year, .. } => *year,
            SchedulePeriod::Amortization { month, .. } => *month,
        }
    }

    /// Returns the balance carried forward by this row.
    ///
    /// This is the remaining amount, the accumulated amount or the
    /// outstanding principal depending on the row type.
    pub fn balance(&self) -> Decimal {
        match self {
            SchedulePeriod::Balance { remaining, .. } => *remaining,
            SchedulePeriod::Accumulation { amount, .. } => *amount,
            SchedulePeriod::Amortization { outstanding, .. } => *outstanding,
        }
    }
}
