//! Service layer for budget-tracker
//!
//! The ledger store applies mutations on top of the data models; the
//! generator supplies ids, colors and dates for new entries.

pub mod generator;
pub mod ledger;

pub use generator::{Generator, SequentialGenerator, SystemGenerator};
pub use ledger::{LedgerStore, RemovedCategory};
