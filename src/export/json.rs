//! JSON export
//!
//! Serializes an expense list as a pretty-printed array of objects with
//! fixed keys. Amounts are numeric decimal values here, not formatted
//! currency strings.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Wire shape of one exported record
#[derive(Serialize)]
struct ExportRecord<'a> {
    date: String,
    category: &'a str,
    description: &'a str,
    amount: f64,
}

/// Write expenses as a pretty-printed JSON array
pub fn write_expenses<W: Write>(writer: &mut W, expenses: &[Expense]) -> ExpenseResult<()> {
    let records: Vec<ExportRecord> = expenses
        .iter()
        .map(|e| ExportRecord {
            date: e.date.format("%Y-%m-%d").to_string(),
            category: e.category.name(),
            description: &e.description,
            amount: e.amount.to_major_units(),
        })
        .collect();

    serde_json::to_writer_pretty(writer, &records)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
