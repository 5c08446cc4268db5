//! Schedule export.
//!
//! Turns a [`Calculation`] into a named table of string cells and writes it
//! out as CSV. Goal SIP has nothing to export; a fixed deposit exports a
//! single summary row.

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Calculation, CalculatorKind, SchedulePeriod};

/// A schedule laid out as a sheet of rows ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSheet {
    /// Human-readable sheet name, e.g. "EMI Schedule".
    pub sheet_name: &'static str,
    /// File name without extension, e.g. "emi_schedule".
    pub file_stem: &'static str,
    /// Column headers.
    pub headers: Vec<&'static str>,
    /// Data rows, one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl ScheduleSheet {
    /// Builds the export sheet for a calculation.
    ///
    /// # Returns
    ///
    /// Returns `NoSchedule` for calculators that have nothing to export
    /// (goal SIP).
    ///
    /// # Examples
    ///
    /// ```
    /// use invest_calc::calculation::calculate_sip;
    /// use invest_calc::config::CalculatorConfig;
    /// use invest_calc::export::ScheduleSheet;
    /// use invest_calc::models::SipInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = SipInput {
    ///     monthly_investment: Decimal::from(1_000),
    ///     annual_rate: Decimal::from(6),
    ///     years: 1,
    /// };
    /// let calculation = calculate_sip(&input, &CalculatorConfig::default()).unwrap();
    /// let sheet = ScheduleSheet::from_calculation(&calculation).unwrap();
    ///
    /// assert_eq!(sheet.sheet_name, "SIP Data");
    /// assert_eq!(sheet.rows.len(), 12);
    /// ```
    pub fn from_calculation(calculation: &Calculation) -> EngineResult<Self> {
        let result = &calculation.result;

        let sheet = match result.calculator {
            CalculatorKind::Sip => Self::balance_sheet("SIP Data", "sip_data", &calculation.schedule),
            CalculatorKind::Swp => Self::balance_sheet("SWP Data", "swp_data", &calculation.schedule),
            CalculatorKind::StepUpSip => Self {
                sheet_name: "Step-up SIP Data",
                file_stem: "stepup_sip_data",
                headers: vec!["Year", "Investment", "Amount"],
                rows: calculation
                    .schedule
                    .iter()
                    .filter_map(|row| match row {
                        SchedulePeriod::Accumulation {
                            year,
                            investment,
                            amount,
                        } => Some(vec![year.to_string(), cell(*investment), cell(*amount)]),
                        _ => None,
                    })
                    .collect(),
            },
            CalculatorKind::Emi => Self {
                sheet_name: "EMI Schedule",
                file_stem: "emi_schedule",
                headers: vec!["Month", "Principal Paid", "Interest Paid", "Outstanding Principal"],
                rows: calculation
                    .schedule
                    .iter()
                    .filter_map(|row| match row {
                        SchedulePeriod::Amortization {
                            month,
                            principal_paid,
                            interest_paid,
                            outstanding,
                        } => Some(vec![
                            month.to_string(),
                            cell(*principal_paid),
                            cell(*interest_paid),
                            cell(*outstanding),
                        ]),
                        _ => None,
                    })
                    .collect(),
            },
            CalculatorKind::Fd => Self {
                sheet_name: "FD Data",
                file_stem: "fd_data",
                headers: vec!["Principal", "Maturity Amount", "Earnings"],
                rows: vec![vec![
                    cell(result.total_invested),
                    cell(result.final_amount),
                    cell(result.total_earnings),
                ]],
            },
            CalculatorKind::GoalSip => {
                return Err(EngineError::NoSchedule {
                    calculator: result.calculator.id().to_string(),
                });
            }
        };

        Ok(sheet)
    }

    fn balance_sheet(
        sheet_name: &'static str,
        file_stem: &'static str,
        schedule: &[SchedulePeriod],
    ) -> Self {
        Self {
            sheet_name,
            file_stem,
            headers: vec!["Month", "Remaining Amount"],
            rows: schedule
                .iter()
                .filter_map(|row| match row {
                    SchedulePeriod::Balance { month, remaining } => {
                        Some(vec![month.to_string(), cell(*remaining)])
                    }
                    _ => None,
                })
                .collect(),
        }
    }

    /// The download file name, e.g. "emi_schedule.csv".
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.file_stem)
    }

    /// Writes the header row and every data row as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> EngineResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(&self.headers).map_err(export_error)?;
        for row in &self.rows {
            csv_writer.write_record(row).map_err(export_error)?;
        }

        csv_writer.flush().map_err(|e| EngineError::ExportError {
            message: e.to_string(),
        })
    }

    /// Renders the sheet to an in-memory CSV buffer.
    pub fn to_csv_bytes(&self) -> EngineResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(buffer)
    }
}

fn cell(value: Decimal) -> String {
    value.normalize().to_string()
}

fn export_error(error: csv::Error) -> EngineError {
    EngineError::ExportError {
        message: error.to_string(),
    }
}
