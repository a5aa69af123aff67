//! Savings CLI commands
//!
//! The savings pool is the budget of the reserved savings category; earnings
//! are simple-interest projections and are never credited to the pool.

use clap::Subcommand;

use super::context::{print_unchanged, BudgetContext};
use crate::audit::{AuditEntry, EntityType};
use crate::display::format_savings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{coerce_rate, Money, SAVINGS_CATEGORY_ID};
use crate::services::Generator;

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Show the pool, rate and projected earnings
    Show,

    /// Set the annual interest rate in percent (clamped to 0-100)
    Rate {
        /// Rate such as "6", "6.5" or "6%"
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },

    /// Set the savings pool amount
    Pool {
        /// Pool amount; negative values are stored as zero
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a savings command
pub fn handle_savings_command<G: Generator>(
    ctx: &mut BudgetContext<G>,
    cmd: SavingsCommands,
) -> BudgetResult<()> {
    match cmd {
        SavingsCommands::Show => {
            print!("{}", format_savings(&ctx.ledger().summary(), ctx.symbol()));
        }

        SavingsCommands::Rate { percent } => {
            let before = ctx.ledger().savings_annual_rate;
            if !ctx.store_mut().set_savings_rate(coerce_rate(&percent)) {
                print_unchanged(&format!("savings rate is already {:.2}%", before));
                return Ok(());
            }

            let after = ctx.ledger().savings_annual_rate;
            ctx.commit(vec![AuditEntry::update(
                EntityType::SavingsRate,
                "savings_annual_rate",
                None,
                &before,
                &after,
            )]);

            println!("Savings rate: {:.2}% -> {:.2}%", before, after);
            println!(
                "Projected monthly earnings: {}",
                ctx.ledger()
                    .monthly_savings_earnings()
                    .format_with_symbol(ctx.symbol())
            );
        }

        SavingsCommands::Pool { amount } => {
            let before = ctx
                .ledger()
                .savings_category()
                .cloned()
                .ok_or_else(|| BudgetError::category_not_found(SAVINGS_CATEGORY_ID))?;
            let id = before.id.clone();

            if !ctx
                .store_mut()
                .update_category_budget(&id, Money::coerce(&amount))
            {
                print_unchanged("savings pool is unchanged");
                return Ok(());
            }

            let after = ctx
                .ledger()
                .category(&id)
                .cloned()
                .ok_or_else(|| BudgetError::category_not_found(id.as_str()))?;
            ctx.commit(vec![AuditEntry::update(
                EntityType::Category,
                id.as_str(),
                Some(after.name.clone()),
                &before,
                &after,
            )]);

            let symbol = ctx.symbol();
            println!(
                "Savings pool: {} -> {}",
                before.budget.format_with_symbol(symbol),
                after.budget.format_with_symbol(symbol)
            );
            println!(
                "Projected monthly earnings: {}",
                ctx.ledger()
                    .monthly_savings_earnings()
                    .format_with_symbol(symbol)
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

    fn open(temp_dir: &TempDir) -> BudgetContext<SequentialGenerator> {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        BudgetContext::open_with_generator(paths, Settings::default(), SequentialGenerator::default())
            .unwrap()
    }

    #[test]
    fn test_pool_and_rate_drive_earnings() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        handle_savings_command(
            &mut ctx,
            SavingsCommands::Pool {
                amount: "1000".into(),
            },
        )
        .unwrap();
        handle_savings_command(
            &mut ctx,
            SavingsCommands::Rate {
                percent: "6%".into(),
            },
        )
        .unwrap();

        assert_eq!(ctx.ledger().savings_annual_rate, 6.0);
        assert_eq!(ctx.ledger().monthly_savings_earnings(), Money::from_cents(500));
        assert_eq!(ctx.recent_audit_entries(10).unwrap().len(), 2);
    }

    #[test]
    fn test_pool_follows_flagged_category() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(
            paths.ledger_file(),
            r##"{"categories": [{"id": "pool", "name": "Nest egg", "budget": 100, "isSavings": true, "color": "#10B981"}]}"##,
        )
        .unwrap();
        let mut ctx = BudgetContext::open_with_generator(
            paths,
            Settings::default(),
            SequentialGenerator::default(),
        )
        .unwrap();

        handle_savings_command(
            &mut ctx,
            SavingsCommands::Pool {
                amount: "2500".into(),
            },
        )
        .unwrap();

        assert_eq!(ctx.ledger().savings_pool(), Money::from_units(2500));
        assert_eq!(ctx.ledger().categories.len(), 1);
    }

    #[test]
    fn test_rate_is_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        handle_savings_command(
            &mut ctx,
            SavingsCommands::Rate {
                percent: "250".into(),
            },
        )
        .unwrap();
        assert_eq!(ctx.ledger().savings_annual_rate, 100.0);
    }

    #[test]
    fn test_negative_pool_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        handle_savings_command(
            &mut ctx,
            SavingsCommands::Pool {
                amount: "-10".into(),
            },
        )
        .unwrap();
        assert!(ctx.ledger().savings_pool().is_zero());
    }
}
