//! Display formatting for terminal output

pub mod category;
pub mod expense;
pub mod report;

pub use category::{format_category_details, format_category_list};
pub use expense::format_expense_list;
pub use report::{format_dashboard, format_savings, format_summary};
