//! budget-tracker - a personal monthly budget ledger
//!
//! Tracks a monthly income, budget categories with spending, and a savings
//! pool earning simple interest. All derived figures (spent, balance, usage,
//! unallocated income, projected earnings) are computed on demand from the
//! ledger, which is persisted as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Ledger data model and derived figures
//! - `services`: Mutations with id/color/date generation
//! - `storage`: JSON slot persistence
//! - `audit`: Audit logging system
//! - `export`: CSV report and full JSON/YAML snapshots
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::models::{Ledger, Money};
//! use budget_tracker::services::LedgerStore;
//!
//! let mut store = LedgerStore::new(Ledger::default());
//! store.set_income(Money::from_units(5000));
//! let food = store.add_category("Food", Money::from_units(800)).unwrap();
//! store.add_expense(&food, "Groceries", Money::from_units(50));
//! assert_eq!(store.ledger().unallocated(), Money::from_units(4200));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BudgetError;
