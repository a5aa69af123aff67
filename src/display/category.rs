//! Category display formatting

use crate::models::{Category, CategoryStatus, Ledger};

use super::expense::format_expense_list;
use super::report::format_percentage;

/// Format categories as a table of budget, spent, balance and usage
pub fn format_category_list(statuses: &[CategoryStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = statuses
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}  {:>7}  {}\n",
        "Category",
        "Budget",
        "Spent",
        "Balance",
        "Usage",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->12}  {:->7}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for status in statuses {
        let marker = if status.is_over_budget() { " !" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}  {:>7}  {}{}\n",
            status.name,
            status.budget.format_with_symbol(symbol),
            status.spent.format_with_symbol(symbol),
            status.balance.format_with_symbol(symbol),
            format_percentage(status.usage_percent),
            status.id,
            marker,
            width = name_width
        ));
    }

    output
}

/// Format one category with its figures and expenses
pub fn format_category_details(ledger: &Ledger, category: &Category, symbol: &str) -> String {
    let status = ledger.category_status(category);
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:      {}\n", category.id));
    output.push_str(&format!("  Type:    {}\n", category.kind_label()));
    output.push_str(&format!("  Color:   {}\n", category.color));
    output.push_str(&format!(
        "  Budget:  {}\n",
        status.budget.format_with_symbol(symbol)
    ));

    if category.is_savings {
        output.push_str(&format!(
            "  Monthly earnings: {}\n",
            ledger.monthly_savings_earnings().format_with_symbol(symbol)
        ));
        return output;
    }

    output.push_str(&format!(
        "  Spent:   {}\n",
        status.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance: {}\n",
        status.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Usage:   {}\n",
        format_percentage(status.usage_percent)
    ));

    let expenses = ledger.category_expenses(&category.id);
    output.push('\n');
    output.push_str(&format_expense_list(ledger, &expenses, symbol));

    output
}
