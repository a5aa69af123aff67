//! Income CLI commands

use clap::Subcommand;

use super::context::{print_unchanged, BudgetContext};
use crate::audit::{AuditEntry, EntityType};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::Generator;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Income amount (e.g., "5000" or "5000.00"); unparsable input counts as 0
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show income against what has been budgeted
    Show,
}

/// Handle an income command
pub fn handle_income_command<G: Generator>(
    ctx: &mut BudgetContext<G>,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            let before = ctx.ledger().income;
            let income = Money::coerce(&amount);

            if !ctx.store_mut().set_income(income) {
                print_unchanged(&format!(
                    "income is already {}",
                    income.format_with_symbol(ctx.symbol())
                ));
                return Ok(());
            }

            ctx.commit(vec![AuditEntry::update(
                EntityType::Income,
                "income",
                None,
                &before,
                &income,
            )]);

            let symbol = ctx.symbol();
            println!("Income set to {}", income.format_with_symbol(symbol));
            let unallocated = ctx.ledger().unallocated();
            if unallocated.is_negative() {
                println!(
                    "Warning: budgets exceed income by {}",
                    unallocated.abs().format_with_symbol(symbol)
                );
            } else {
                println!("Unallocated: {}", unallocated.format_with_symbol(symbol));
            }
        }

        IncomeCommands::Show => {
            let ledger = ctx.ledger();
            let symbol = ctx.symbol();

            println!("Income:      {:>14}", ledger.income.format_with_symbol(symbol));
            println!(
                "Budgeted:    {:>14}",
                ledger.total_budgeted().format_with_symbol(symbol)
            );
            println!("{}", "-".repeat(27));
            println!(
                "Unallocated: {:>14}",
                ledger.unallocated().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
