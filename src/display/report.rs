//! Dashboard and savings formatting for terminal output

use crate::models::{Ledger, LedgerSummary};

use super::category::format_category_list;

const BAR_WIDTH: usize = 20;

/// Usage percentage with one decimal, or "N/A" for the savings category
pub fn format_percentage(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{:.1}%", p),
        None => "N/A".to_string(),
    }
}

/// A progress bar; over-budget usage fills the bar
pub fn format_bar(pct: f64, width: usize) -> String {
    if !(pct > 0.0) {
        return "░".repeat(width);
    }

    let filled = ((pct.min(100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format the top-line totals
pub fn format_summary(summary: &LedgerSummary, symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("Income:       {:>14}\n", money(summary.income)));
    output.push_str(&format!("Budgeted:     {:>14}\n", money(summary.total_budgeted)));
    output.push_str(&format!("Spent:        {:>14}\n", money(summary.total_spent)));
    output.push_str(&format!("Unallocated:  {:>14}", money(summary.unallocated)));
    if summary.unallocated.is_negative() {
        output.push_str("  (over-allocated)");
    }
    output.push('\n');

    output
}

/// Format the savings pool and its projected simple interest
pub fn format_savings(summary: &LedgerSummary, symbol: &str) -> String {
    let money = |m: crate::models::Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str("Savings\n");
    output.push_str(&format!("  Pool:              {:>14}\n", money(summary.savings_pool)));
    output.push_str(&format!(
        "  Annual rate:       {:>13.2}%\n",
        summary.savings_annual_rate
    ));
    output.push_str(&format!(
        "  Monthly earnings:  {:>14}\n",
        money(summary.monthly_savings_earnings)
    ));
    output.push_str(&format!(
        "  Annual earnings:   {:>14}\n",
        money(summary.annual_savings_earnings)
    ));

    output
}

/// Full dashboard: totals, per-category progress and savings
pub fn format_dashboard(ledger: &Ledger, symbol: &str) -> String {
    let summary = ledger.summary();
    let statuses = ledger.category_statuses();
    let mut output = String::new();

    output.push_str("Budget Dashboard\n");
    output.push_str(&separator(48));
    output.push('\n');
    output.push_str(&format_summary(&summary, symbol));
    output.push('\n');

    let spending: Vec<_> = statuses.iter().filter(|s| !s.is_savings).collect();
    if spending.is_empty() {
        output.push_str("No spending categories yet.\n");
    } else {
        let name_width = spending.iter().map(|s| s.name.chars().count()).max().unwrap_or(4);
        for status in spending {
            let pct = status.usage_percent.unwrap_or(0.0);
            output.push_str(&format!(
                "{:<width$}  {}  {:>7}  {} left\n",
                status.name,
                format_bar(pct, BAR_WIDTH),
                format_percentage(status.usage_percent),
                status.balance.format_with_symbol(symbol),
                width = name_width
            ));
        }
    }
    output.push('\n');

    output.push_str(&format_savings(&summary, symbol));
    output.push('\n');
    output.push_str(&format_category_list(&statuses, symbol));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use crate::services::{LedgerStore, SequentialGenerator};

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(11.26)), "11.3%");
        assert_eq!(format_percentage(Some(0.0)), "0.0%");
        assert_eq!(format_percentage(None), "N/A");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.0, 4), "░░░░");
        assert_eq!(format_bar(50.0, 4), "██░░");
        assert_eq!(format_bar(250.0, 4), "████");
        assert_eq!(format_bar(f64::NAN, 2), "░░");
    }

    #[test]
    fn test_summary_flags_over_allocation() {
        let mut ledger = Ledger::default();
        ledger.categories[0].budget = Money::from_units(100);
        let text = format_summary(&ledger.summary(), "$");
        assert!(text.contains("-$100.00"));
        assert!(text.contains("over-allocated"));
    }

    #[test]
    fn test_dashboard() {
        let mut store =
            LedgerStore::with_generator(Ledger::seeded(6.0), SequentialGenerator::default());
        store.set_income(Money::from_units(5000));
        store.update_category_budget(&CategoryId::savings(), Money::from_units(1000));
        let food = store.add_category("Food", Money::from_units(800)).unwrap();
        store.add_expense(&food, "Lunch", Money::from_units(50));

        let text = format_dashboard(store.ledger(), "$");
        assert!(text.contains("Income:"));
        assert!(text.contains("$5000.00"));
        assert!(text.contains("$750.00 left"));
        assert!(text.contains("Monthly earnings:"));
        assert!(text.contains("$5.00"));
        assert!(text.contains("N/A"));
    }
}
