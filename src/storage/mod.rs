//! Storage layer for budget-tracker
//!
//! The whole ledger lives in a single JSON slot. It is read once at startup
//! and rewritten atomically after every applied mutation.

pub mod file_io;

pub use file_io::{read_json_if_exists, write_json_atomic};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::{Ledger, DEFAULT_SAVINGS_RATE};

/// The durable slot holding the ledger
#[derive(Debug, Clone)]
pub struct LedgerSlot {
    path: PathBuf,
}

impl LedgerSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the slot, surfacing failures.
    ///
    /// Returns `None` if the slot has never been written. A stored ledger is
    /// left with exactly one savings category.
    pub fn try_load(&self) -> Result<Option<Ledger>, BudgetError> {
        let ledger: Option<Ledger> = read_json_if_exists(&self.path)?;
        Ok(ledger.map(|mut ledger| {
            if ledger.ensure_savings_category() {
                warn!(path = %self.path.display(), "stored ledger savings category repaired");
            }
            ledger
        }))
    }

    /// Load the ledger, seeding a fresh one with the default savings rate
    pub fn load(&self) -> Ledger {
        self.load_or_seed(DEFAULT_SAVINGS_RATE)
    }

    /// Load the ledger; a missing or unreadable slot yields a seeded ledger
    /// with the given savings rate.
    pub fn load_or_seed(&self, savings_annual_rate: f64) -> Ledger {
        match self.try_load() {
            Ok(Some(ledger)) => {
                debug!(
                    path = %self.path.display(),
                    categories = ledger.categories.len(),
                    expenses = ledger.expenses.len(),
                    "ledger loaded"
                );
                ledger
            }
            Ok(None) => Ledger::seeded(savings_annual_rate),
            Err(err) => {
                warn!(error = %err, "could not read ledger; starting from defaults");
                Ledger::seeded(savings_annual_rate)
            }
        }
    }

    /// Write the full ledger to the slot
    pub fn save(&self, ledger: &Ledger) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, ledger)?;
        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }

    /// Best-effort save: failures are logged and otherwise ignored
    pub fn persist(&self, ledger: &Ledger) {
        if let Err(err) = self.save(ledger) {
            warn!(error = %err, "failed to save ledger");
        }
    }
}
