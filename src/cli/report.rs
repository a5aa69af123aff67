//! Dashboard and audit history commands

use super::context::BudgetContext;
use crate::display::format_dashboard;
use crate::error::BudgetResult;
use crate::services::Generator;

/// Print the dashboard: totals, per-category progress and savings
pub fn handle_dashboard_command<G: Generator>(ctx: &BudgetContext<G>) -> BudgetResult<()> {
    print!("{}", format_dashboard(ctx.ledger(), ctx.symbol()));
    Ok(())
}

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command<G: Generator>(ctx: &BudgetContext<G>, limit: usize) -> BudgetResult<()> {
    let entries = ctx.recent_audit_entries(limit)?;
    if entries.is_empty() {
        println!("No audit entries recorded.");
        if !ctx.settings().audit_enabled {
            println!("Audit logging is disabled in {}", ctx.paths().settings_file().display());
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
