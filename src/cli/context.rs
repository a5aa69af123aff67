//! Shared state for CLI commands
//!
//! Loads the ledger once per invocation and, after each applied mutation,
//! writes it back and appends the matching audit entries.

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, CategoryId, Ledger};
use crate::services::{Generator, LedgerStore, SystemGenerator};
use crate::storage::LedgerSlot;

/// Everything a command handler needs
pub struct BudgetContext<G: Generator = SystemGenerator> {
    paths: BudgetPaths,
    settings: Settings,
    slot: LedgerSlot,
    store: LedgerStore<G>,
    audit: Option<AuditLogger>,
}

impl BudgetContext<SystemGenerator> {
    /// Open the ledger under `paths`, creating the directory layout if needed
    pub fn open(paths: BudgetPaths, settings: Settings) -> BudgetResult<Self> {
        Self::open_with_generator(paths, settings, SystemGenerator)
    }
}

impl<G: Generator> BudgetContext<G> {
    pub fn open_with_generator(
        paths: BudgetPaths,
        settings: Settings,
        generator: G,
    ) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        let slot = LedgerSlot::new(paths.ledger_file());
        let ledger = slot.load_or_seed(settings.default_savings_rate);
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            paths,
            settings,
            slot,
            store: LedgerStore::with_generator(ledger, generator),
            audit,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Currency symbol used for every printed amount
    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn ledger(&self) -> &Ledger {
        self.store.ledger()
    }

    pub fn store_mut(&mut self) -> &mut LedgerStore<G> {
        &mut self.store
    }

    /// Look up a category by id or name, failing with `NotFound`
    pub fn require_category(&self, identifier: &str) -> BudgetResult<&Category> {
        self.ledger()
            .find_category(identifier)
            .ok_or_else(|| BudgetError::category_not_found(identifier))
    }

    /// Resolve a category by id or name for a mutation.
    ///
    /// Unknown identifiers are passed through unchanged; the store then
    /// treats the mutation as a no-op.
    pub fn resolve_category_id(&self, identifier: &str) -> CategoryId {
        self.ledger()
            .find_category(identifier)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| CategoryId::new(identifier.trim()))
    }

    /// Persist the ledger and record what changed.
    ///
    /// Both steps are best-effort: the in-memory state stays authoritative
    /// for the rest of the invocation.
    pub fn commit(&self, entries: Vec<AuditEntry>) {
        self.slot.persist(self.store.ledger());

        if let Some(audit) = &self.audit {
            if let Err(err) = audit.log_batch(&entries) {
                warn!(error = %err, path = %audit.path().display(), "failed to write audit log");
            }
        }
    }

    /// Recent audit entries, oldest first
    pub fn recent_audit_entries(&self, count: usize) -> BudgetResult<Vec<AuditEntry>> {
        AuditLogger::new(self.paths.audit_log()).read_recent(count)
    }
}

/// Printed when a command leaves the ledger untouched
pub(crate) fn print_unchanged(reason: &str) {
    println!("Nothing changed: {}", reason);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::SequentialGenerator;
    use tempfile::TempDir;

    fn open(temp_dir: &TempDir) -> BudgetContext<SequentialGenerator> {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        BudgetContext::open_with_generator(paths, Settings::default(), SequentialGenerator::default())
            .unwrap()
    }

    #[test]
    fn test_fresh_context_is_seeded() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = open(&temp_dir);

        assert!(ctx.ledger().savings_category().is_some());
        assert_eq!(ctx.symbol(), "$");
    }

    #[test]
    fn test_commit_persists_and_audits() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);

        let id = ctx
            .store_mut()
            .add_category("Food", Money::from_units(800))
            .unwrap();
        let category = ctx.ledger().category(&id).unwrap().clone();
        ctx.commit(vec![AuditEntry::create(
            crate::audit::EntityType::Category,
            id.as_str(),
            Some(category.name.clone()),
            &category,
        )]);

        let reopened = open(&temp_dir);
        assert!(reopened.ledger().find_category("food").is_some());
        assert_eq!(reopened.recent_audit_entries(10).unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_category_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = open(&temp_dir);
        let id = ctx
            .store_mut()
            .add_category("Food", Money::from_units(800))
            .unwrap();

        assert_eq!(ctx.resolve_category_id("Food"), id);
        assert_eq!(ctx.resolve_category_id("missing"), CategoryId::new("missing"));
        assert!(ctx.require_category("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_audit_disabled_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let mut ctx =
            BudgetContext::open_with_generator(paths, settings, SequentialGenerator::default())
                .unwrap();

        ctx.store_mut().set_income(Money::from_units(100));
        ctx.commit(vec![AuditEntry::update(
            crate::audit::EntityType::Income,
            "income",
            None,
            &Money::zero(),
            &Money::from_units(100),
        )]);

        assert!(!ctx.paths().audit_log().exists());
    }
}
