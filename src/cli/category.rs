//! Category CLI commands
//!
//! Categories are addressed by ID or by (case-insensitive) name. Mutations
//! that the ledger rejects leave everything untouched and say so.

use clap::Subcommand;

use super::context::{print_unchanged, BudgetContext};
use crate::audit::{AuditEntry, EntityType};
use crate::display::category::{format_category_details, format_category_list};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::Generator;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with spent, balance and usage
    List,

    /// Create a new spending category
    Add {
        /// Category name
        name: String,
        /// Monthly budget (e.g., "800" or "800.00"); must be positive
        #[arg(allow_hyphen_values = true)]
        budget: String,
    },

    /// Show category details and its expenses
    Show {
        /// Category name or ID
        category: String,
    },

    /// Change a category's budget (on the savings category, the pool)
    Budget {
        /// Category name or ID
        category: String,
        /// New budget; negative values are stored as zero
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete a category together with its expenses
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command<G: Generator>(
    ctx: &mut BudgetContext<G>,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            let statuses = ctx.ledger().category_statuses();
            print!("{}", format_category_list(&statuses, ctx.symbol()));
        }

        CategoryCommands::Add { name, budget } => {
            let budget = Money::coerce(&budget);
            let Some(id) = ctx.store_mut().add_category(&name, budget) else {
                print_unchanged("a category needs a name and a positive budget");
                return Ok(());
            };

            let category = match ctx.ledger().category(&id) {
                Some(category) => category.clone(),
                None => return Ok(()),
            };
            ctx.commit(vec![AuditEntry::create(
                EntityType::Category,
                id.as_str(),
                Some(category.name.clone()),
                &category,
            )]);

            println!("Created category: {}", category.name);
            println!("  Budget: {}", category.budget.format_with_symbol(ctx.symbol()));
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let found = ctx.require_category(&category)?;
            print!(
                "{}",
                format_category_details(ctx.ledger(), found, ctx.symbol())
            );
        }

        CategoryCommands::Budget { category, amount } => {
            let id = ctx.resolve_category_id(&category);
            let Some(before) = ctx.ledger().category(&id).cloned() else {
                print_unchanged(&format!("no category '{}'", category));
                return Ok(());
            };

            if !ctx
                .store_mut()
                .update_category_budget(&id, Money::coerce(&amount))
            {
                print_unchanged(&format!("{} budget is unchanged", before.name));
                return Ok(());
            }

            let after = match ctx.ledger().category(&id) {
                Some(category) => category.clone(),
                None => return Ok(()),
            };
            ctx.commit(vec![AuditEntry::update(
                EntityType::Category,
                id.as_str(),
                Some(after.name.clone()),
                &before,
                &after,
            )]);

            println!(
                "{} budget: {} -> {}",
                after.name,
                before.budget.format_with_symbol(ctx.symbol()),
                after.budget.format_with_symbol(ctx.symbol())
            );
        }

        CategoryCommands::Delete { category } => {
            let id = ctx.resolve_category_id(&category);
            let Some(removed) = ctx.store_mut().delete_category(&id) else {
                if id.is_savings() {
                    print_unchanged("the savings category cannot be deleted");
                } else {
                    print_unchanged(&format!("no category '{}'", category));
                }
                return Ok(());
            };

            let mut entries = Vec::with_capacity(removed.expenses.len() + 1);
            entries.push(AuditEntry::delete(
                EntityType::Category,
                removed.category.id.as_str(),
                Some(removed.category.name.clone()),
                &removed.category,
            ));
            entries.extend(removed.expenses.iter().map(|expense| {
                AuditEntry::delete(
                    EntityType::Expense,
                    expense.id.as_str(),
                    Some(expense.description.clone()),
                    expense,
                )
            }));
            ctx.commit(entries);

            println!("Deleted category: {}", removed.category.name);
            if !removed.expenses.is_empty() {
                println!("  Removed {} expense(s)", removed.expenses.len());
            }
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

    fn open(temp_dir: &TempDir) -> BudgetContext<SequentialGenerator> {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        BudgetContext::open_with_generator(paths, Settings::default(), SequentialGenerator::default())
            .unwrap()
    }

    #[test]
    fn test_add_then_delete_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        handle_category_command(
            &mut ctx,
            CategoryCommands::Add {
                name: "Food".into(),
                budget: "800".into(),
            },
        )
        .unwrap();
        assert!(ctx.ledger().find_category("Food").is_some());

        handle_category_command(
            &mut ctx,
            CategoryCommands::Delete {
                category: "food".into(),
            },
        )
        .unwrap();
        assert!(ctx.ledger().find_category("Food").is_none());
        assert_eq!(ctx.recent_audit_entries(10).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_add_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        handle_category_command(
            &mut ctx,
            CategoryCommands::Add {
                name: "Food".into(),
                budget: "abc".into(),
            },
        )
        .unwrap();

        assert_eq!(ctx.ledger().categories.len(), 1);
        assert!(ctx.recent_audit_entries(10).unwrap().is_empty());
    }

    #[test]
    fn test_savings_budget_sets_pool() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        handle_category_command(
            &mut ctx,
            CategoryCommands::Budget {
                category: "savings".into(),
                amount: "1000".into(),
            },
        )
        .unwrap();

        assert_eq!(ctx.ledger().savings_pool(), Money::from_units(1000));
    }

    #[test]
    fn test_show_unknown_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        let err = handle_category_command(
            &mut ctx,
            CategoryCommands::Show {
                category: "missing".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
