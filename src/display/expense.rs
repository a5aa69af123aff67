//! Expense display formatting

use crate::models::{Expense, Ledger};

/// Format expenses as a table; category names are resolved through the ledger
pub fn format_expense_list(ledger: &Ledger, expenses: &[&Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let category_name = |e: &Expense| {
        ledger
            .category(&e.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    };

    let cat_width = expenses
        .iter()
        .map(|e| category_name(*e).chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let desc_width = expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<cw$}  {:<dw$}  {:>12}  {}\n",
        "Date",
        "Category",
        "Description",
        "Amount",
        "ID",
        cw = cat_width,
        dw = desc_width
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:<cw$}  {:<dw$}  {:>12}  {}\n",
            expense.date.to_string(),
            category_name(*expense),
            expense.description,
            expense.amount.format_with_symbol(symbol),
            expense.id,
            cw = cat_width,
            dw = desc_width
        ));
    }

    let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&format!(
        "{:<10}  {:<cw$}  {:<dw$}  {:>12}\n",
        "",
        "",
        "Total",
        total.format_with_symbol(symbol),
        cw = cat_width,
        dw = desc_width
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::{LedgerStore, SequentialGenerator};

    #[test]
    fn test_expense_list() {
        let mut store =
            LedgerStore::with_generator(Ledger::seeded(5.0), SequentialGenerator::default());
        let food = store.add_category("Food", Money::from_units(800)).unwrap();
        store.add_expense(&food, "Lunch", Money::from_units(50));
        store.add_expense(&food, "Dinner", Money::from_units(40));

        let ledger = store.ledger();
        let expenses = ledger.expenses_newest_first();
        let text = format_expense_list(ledger, &expenses, "$");

        assert!(text.starts_with("Date"));
        assert!(text.contains("2025-01-01"));
        assert!(text.contains("Food"));
        assert!(text.contains("$50.00"));
        assert!(text.contains("$90.00"));
    }

    #[test]
    fn test_empty_expense_list() {
        let ledger = Ledger::default();
        assert_eq!(
            format_expense_list(&ledger, &[], "$"),
            "No expenses recorded.\n"
        );
    }
}
