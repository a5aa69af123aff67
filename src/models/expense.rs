//! Expense model
//!
//! An expense is a dated amount recorded against a spending category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A single expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,

    pub category_id: CategoryId,

    #[serde(default)]
    pub description: String,

    pub amount: Money,

    /// Calendar date the expense was recorded (YYYY-MM-DD)
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        category_id: CategoryId,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            category_id,
            description: description.into(),
            amount,
            date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description, self.amount)
    }
}
