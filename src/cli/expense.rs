//! Expense CLI commands

use clap::Subcommand;

use super::context::{print_unchanged, BudgetContext};
use crate::audit::{AuditEntry, EntityType};
use crate::display::expense::format_expense_list;
use crate::error::BudgetResult;
use crate::models::{ExpenseId, Money};
use crate::services::Generator;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense dated today
    Add {
        /// Category name or ID (not the savings category)
        category: String,
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "50" or "49.90"); must be positive
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List expenses, newest first
    List {
        /// Only show expenses of this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command<G: Generator>(
    ctx: &mut BudgetContext<G>,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            description,
            amount,
        } => {
            let category_id = ctx.resolve_category_id(&category);
            let amount = Money::coerce(&amount);

            let Some(id) = ctx
                .store_mut()
                .add_expense(&category_id, &description, amount)
            else {
                print_unchanged(
                    "an expense needs an existing spending category, a description and a positive amount",
                );
                return Ok(());
            };

            let expense = match ctx.ledger().expense(&id) {
                Some(expense) => expense.clone(),
                None => return Ok(()),
            };
            ctx.commit(vec![AuditEntry::create(
                EntityType::Expense,
                id.as_str(),
                Some(expense.description.clone()),
                &expense,
            )]);

            let ledger = ctx.ledger();
            let symbol = ctx.symbol();
            let name = ledger
                .category(&category_id)
                .map(|c| c.name.as_str())
                .unwrap_or("Unknown");
            println!(
                "Recorded {} for '{}' in {}",
                expense.amount.format_with_symbol(symbol),
                expense.description,
                name
            );
            println!("  ID: {}", expense.id);
            if let Some(balance) = ledger.balance(&category_id) {
                println!("  {} balance: {}", name, balance.format_with_symbol(symbol));
                if balance.is_negative() {
                    println!("  Warning: {} is over budget", name);
                }
            }
        }

        ExpenseCommands::List { category, limit } => {
            let ledger = ctx.ledger();
            let mut expenses = match &category {
                Some(identifier) => {
                    let category = ctx.require_category(identifier)?;
                    ledger
                        .expenses_newest_first()
                        .into_iter()
                        .filter(|e| e.category_id == category.id)
                        .collect()
                }
                None => ledger.expenses_newest_first(),
            };
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            print!("{}", format_expense_list(ledger, &expenses, ctx.symbol()));
        }

        ExpenseCommands::Delete { id } => {
            let id = ExpenseId::new(id.trim());
            let Some(removed) = ctx.store_mut().delete_expense(&id) else {
                print_unchanged(&format!("no expense '{}'", id));
                return Ok(());
            };

            ctx.commit(vec![AuditEntry::delete(
                EntityType::Expense,
                removed.id.as_str(),
                Some(removed.description.clone()),
                &removed,
            )]);

            println!(
                "Deleted expense: {} ({})",
                removed.description,
                removed.amount.format_with_symbol(ctx.symbol())
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BudgetPaths, Settings};
    use crate::services::SequentialGenerator;
    use tempfile::TempDir;

    fn open_with_food(temp_dir: &TempDir) -> BudgetContext<SequentialGenerator> {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = BudgetContext::open_with_generator(
            paths,
            Settings::default(),
            SequentialGenerator::default(),
        )
        .unwrap();
        ctx.store_mut()
            .add_category("Food", Money::from_units(800))
            .unwrap();
        ctx
    }

    fn add(ctx: &mut BudgetContext<SequentialGenerator>, category: &str, amount: &str) {
        handle_expense_command(
            ctx,
            ExpenseCommands::Add {
                category: category.into(),
                description: "Lunch".into(),
                amount: amount.into(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_add_by_category_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open_with_food(&temp_dir);

        add(&mut ctx, "food", "50");
        add(&mut ctx, "Food", "40");

        let food = ctx.ledger().find_category("Food").unwrap().id.clone();
        assert_eq!(ctx.ledger().spent(&food), Money::from_units(90));
        assert_eq!(ctx.ledger().balance(&food), Some(Money::from_units(710)));
    }

    #[test]
    fn test_rejected_expenses_are_noops() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open_with_food(&temp_dir);

        add(&mut ctx, "savings", "50");
        add(&mut ctx, "missing", "50");
        add(&mut ctx, "Food", "-5");
        add(&mut ctx, "Food", "lots");

        assert!(ctx.ledger().expenses.is_empty());
    }

    #[test]
    fn test_delete_expense() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open_with_food(&temp_dir);
        add(&mut ctx, "Food", "50");
        let id = ctx.ledger().expenses[0].id.to_string();

        handle_expense_command(&mut ctx, ExpenseCommands::Delete { id: id.clone() }).unwrap();
        assert!(ctx.ledger().expenses.is_empty());

        // Second delete is a no-op
        handle_expense_command(&mut ctx, ExpenseCommands::Delete { id }).unwrap();
    }

    #[test]
    fn test_list_unknown_category_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open_with_food(&temp_dir);

        let err = handle_expense_command(
            &mut ctx,
            ExpenseCommands::List {
                category: Some("missing".into()),
                limit: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
