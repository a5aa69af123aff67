//! CLI commands for data export
//!
//! `report` writes the per-category CSV; `all` writes a full snapshot.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use super::context::BudgetContext;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_full_json, export_full_yaml, write_category_report};
use crate::services::Generator;

/// Snapshot format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SnapshotFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the category report as CSV
    Report {
        /// Output file path (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the whole ledger to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: SnapshotFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command<G: Generator>(
    ctx: &BudgetContext<G>,
    cmd: ExportCommands,
) -> BudgetResult<()> {
    match cmd {
        ExportCommands::Report { output } => handle_export_report(ctx, output),
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(ctx, &output, format, pretty),
    }
}

fn handle_export_report<G: Generator>(
    ctx: &BudgetContext<G>,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    match output {
        Some(path) => {
            let mut writer = create_output(&path)?;
            write_category_report(ctx.ledger(), &mut writer)?;
            finish(writer, &path)?;
            println!("Category report exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_category_report(ctx.ledger(), stdout.lock())?;
        }
    }

    Ok(())
}

fn handle_export_all<G: Generator>(
    ctx: &BudgetContext<G>,
    output: &Path,
    format: SnapshotFormat,
    pretty: bool,
) -> BudgetResult<()> {
    let mut writer = create_output(output)?;

    match format {
        SnapshotFormat::Json => export_full_json(ctx.ledger(), &mut writer, pretty)?,
        SnapshotFormat::Yaml => export_full_yaml(ctx.ledger(), &mut writer)?,
    }
    finish(writer, output)?;

    let ledger = ctx.ledger();
    println!("Ledger exported to: {}", output.display());
    println!(
        "  {} categories, {} expenses",
        ledger.categories.len(),
        ledger.expenses.len()
    );

    Ok(())
}

fn create_output(path: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>, path: &Path) -> BudgetResult<()> {
    writer.flush().map_err(|e| {
        BudgetError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}
