//! CSV category report
//!
//! One row per category in ledger order:
//! `Category,Budget,Spent,Balance,Type`. Amounts carry exactly two decimals
//! and fields are quoted by standard CSV rules.

use std::io::Write;

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryStatus, Ledger};

const HEADER: [&str; 5] = ["Category", "Budget", "Spent", "Balance", "Type"];

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    category: &'a str,
    budget: String,
    spent: String,
    balance: String,
    kind: &'static str,
}

impl<'a> From<&'a CategoryStatus> for ReportRow<'a> {
    fn from(status: &'a CategoryStatus) -> Self {
        Self {
            category: &status.name,
            budget: status.budget.to_plain_string(),
            spent: status.spent.to_plain_string(),
            balance: status.balance.to_plain_string(),
            kind: if status.is_savings { "Savings" } else { "Expense" },
        }
    }
}

/// Write the category report to `writer`
pub fn write_category_report<W: Write>(ledger: &Ledger, writer: W) -> BudgetResult<()> {
    // Header written by hand so an empty ledger still gets one
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;

    let statuses = ledger.category_statuses();
    for status in &statuses {
        wtr.serialize(ReportRow::from(status))?;
    }

    wtr.flush()
        .map_err(|e| BudgetError::Export(format!("Failed to flush report: {}", e)))?;
    Ok(())
}

/// Render the category report as a string
pub fn category_report_csv(ledger: &Ledger) -> BudgetResult<String> {
    let mut out = Vec::new();
    write_category_report(ledger, &mut out)?;
    String::from_utf8(out).map_err(|e| BudgetError::Export(e.to_string()))
}
