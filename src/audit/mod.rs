//! Audit logging for budget-tracker
//!
//! Every applied ledger mutation (income, category, expense and savings rate
//! changes) is appended to a line-delimited JSON log with before/after values.
//!
//! - `AuditEntry`: one log line with timestamp, operation and entity data.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: human-readable summary of what an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
