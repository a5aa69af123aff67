//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod category;
pub mod context;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;
pub mod savings;

pub use category::{handle_category_command, CategoryCommands};
pub use context::BudgetContext;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands, SnapshotFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_audit_command, handle_dashboard_command};
pub use savings::{handle_savings_command, SavingsCommands};
