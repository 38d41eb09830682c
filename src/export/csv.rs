//! CSV export
//!
//! Serializes an expense list to delimited text with a header row. Fields
//! containing the delimiter, quotes, or newlines are quoted with doubled
//! inner quotes; amounts render with exactly two fractional digits and no
//! thousands separators.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::template::Column;

/// Write expenses as delimited text using the given column set
pub fn write_expenses<W: Write>(
    writer: &mut W,
    expenses: &[Expense],
    columns: &[Column],
) -> ExpenseResult<()> {
    let header = columns
        .iter()
        .map(|c| c.header().to_string())
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", header).map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let row = columns
            .iter()
            .map(|c| match c {
                Column::Date => expense.date.format("%Y-%m-%d").to_string(),
                Column::Category => escape_csv(expense.category.name()),
                Column::Description => escape_csv(&expense.description),
                Column::Amount => expense.amount.to_decimal_string(),
            })
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{}", row).map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
