use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_audit_command, handle_category_command, handle_dashboard_command,
    handle_expense_command, handle_export_command, handle_income_command,
    handle_savings_command, BudgetContext,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::logging;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budget tracker: income, categories, expenses and savings",
    long_about = "Track a monthly income, split it into budget categories, record \
                  expenses against them and watch a savings pool earn simple \
                  interest, all from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(budget_tracker::cli::IncomeCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(budget_tracker::cli::CategoryCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(budget_tracker::cli::ExpenseCommands),

    /// Savings pool and interest rate commands
    #[command(subcommand)]
    Savings(budget_tracker::cli::SavingsCommands),

    /// Show totals, category usage and savings at a glance
    #[command(alias = "dash")]
    Dashboard,

    /// Export the category report or a full snapshot
    #[command(subcommand)]
    Export(budget_tracker::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings and an empty ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("budget-tracker - monthly budgeting from the terminal");
        println!();
        println!("Run 'budget --help' for usage information.");
        println!("Run 'budget dashboard' for an overview.");
        return Ok(());
    };

    if let Commands::Config = command {
        println!("budget-tracker Configuration");
        println!("============================");
        println!("Base directory: {}", paths.base_dir().display());
        println!("Ledger file:    {}", paths.ledger_file().display());
        println!("Audit log:      {}", paths.audit_log().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol:      {}", settings.currency_symbol);
        println!("  Audit logging:        {}", settings.audit_enabled);
        println!("  Default savings rate: {:.2}%", settings.default_savings_rate);
        return Ok(());
    }

    let mut ctx = BudgetContext::open(paths, settings)?;

    match command {
        Commands::Income(cmd) => handle_income_command(&mut ctx, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut ctx, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&mut ctx, cmd)?,
        Commands::Savings(cmd) => handle_savings_command(&mut ctx, cmd)?,
        Commands::Dashboard => handle_dashboard_command(&ctx)?,
        Commands::Export(cmd) => handle_export_command(&ctx, cmd)?,
        Commands::Audit { limit } => handle_audit_command(&ctx, limit)?,
        Commands::Init => {
            println!("Initializing budget-tracker at: {}", ctx.paths().base_dir().display());
            ctx.settings().save(ctx.paths())?;
            ctx.commit(Vec::new());
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  budget income set 5000");
            println!("  budget category add Food 800");
            println!("  budget expense add Food Groceries 50");
        }
        Commands::Config => {}
    }

    Ok(())
}
