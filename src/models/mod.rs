//! Core data models for budget-tracker
//!
//! Categories, expenses, money and the ledger state that ties them together.

pub mod category;
pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;

pub use category::{Category, SAVINGS_COLOR};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, SAVINGS_CATEGORY_ID};
pub use ledger::{clamp_rate, coerce_rate, CategoryStatus, Ledger, LedgerSummary, DEFAULT_SAVINGS_RATE};
pub use money::{Money, MoneyParseError};
