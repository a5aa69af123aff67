//! Export module for budget-tracker
//!
//! - CSV: the per-category report (spreadsheet-compatible)
//! - JSON: full machine-readable ledger snapshot
//! - YAML: full human-readable ledger snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{category_report_csv, write_category_report};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
