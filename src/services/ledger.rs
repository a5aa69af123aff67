//! Ledger store
//!
//! Owns the ledger and applies user mutations to it. Invalid input never
//! fails; it is a no-op. Every mutation reports whether it applied so the
//! caller can decide whether to persist, audit and re-render.

use tracing::debug;

use crate::models::{clamp_rate, Category, CategoryId, Expense, ExpenseId, Ledger, Money};

use super::generator::{Generator, SystemGenerator};

/// A category removed by [`LedgerStore::delete_category`], along with the
/// expenses that were cascaded away with it
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedCategory {
    pub category: Category,
    pub expenses: Vec<Expense>,
}

/// Single-writer owner of the ledger state
#[derive(Debug, Clone)]
pub struct LedgerStore<G: Generator = SystemGenerator> {
    ledger: Ledger,
    generator: G,
}

impl LedgerStore<SystemGenerator> {
    /// Create a store using random ids and the system clock
    pub fn new(ledger: Ledger) -> Self {
        Self::with_generator(ledger, SystemGenerator)
    }
}

impl<G: Generator> LedgerStore<G> {
    pub fn with_generator(ledger: Ledger, generator: G) -> Self {
        Self { ledger, generator }
    }

    /// Read access for all derivation queries
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Replace the monthly income. Returns false if the value is unchanged.
    pub fn set_income(&mut self, income: Money) -> bool {
        if self.ledger.income == income {
            return false;
        }
        debug!(income = %income, "income updated");
        self.ledger.income = income;
        true
    }

    /// Replace the annual savings rate (clamped to 0-100 percent)
    pub fn set_savings_rate(&mut self, rate: f64) -> bool {
        let rate = clamp_rate(rate);
        if self.ledger.savings_annual_rate == rate {
            return false;
        }
        debug!(rate, "savings rate updated");
        self.ledger.savings_annual_rate = rate;
        true
    }

    /// Append a spending category.
    ///
    /// No-op unless the trimmed name is non-empty and the budget is positive.
    pub fn add_category(&mut self, name: &str, budget: Money) -> Option<CategoryId> {
        let name = name.trim();
        if name.is_empty() || !budget.is_positive() {
            return None;
        }

        let id = self.fresh_category_id();
        let color = self.generator.next_color();
        debug!(category_id = %id, name, budget = %budget, "category added");

        self.ledger
            .categories
            .push(Category::new(id.clone(), name, budget, color));
        Some(id)
    }

    /// Remove a category and every expense recorded against it.
    ///
    /// No-op for the savings category and for unknown ids.
    pub fn delete_category(&mut self, id: &CategoryId) -> Option<RemovedCategory> {
        if id.is_savings() {
            return None;
        }
        let index = self
            .ledger
            .categories
            .iter()
            .position(|c| &c.id == id && !c.is_savings)?;

        let category = self.ledger.categories.remove(index);
        let (expenses, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.ledger.expenses)
            .into_iter()
            .partition(|e| &e.category_id == id);
        self.ledger.expenses = kept;

        debug!(
            category_id = %id,
            cascaded = expenses.len(),
            "category deleted"
        );
        Some(RemovedCategory { category, expenses })
    }

    /// Replace a category's budget. Negative amounts normalize to zero.
    ///
    /// On the savings category this sets the pool. Returns false for unknown
    /// ids or an unchanged value.
    pub fn update_category_budget(&mut self, id: &CategoryId, budget: Money) -> bool {
        let budget = budget.non_negative();
        match self.ledger.category_mut(id) {
            Some(category) if category.budget != budget => {
                debug!(category_id = %id, budget = %budget, "category budget updated");
                category.budget = budget;
                true
            }
            _ => false,
        }
    }

    /// Record an expense dated today.
    ///
    /// No-op unless the description is non-empty, the amount is positive and
    /// the category exists and is not the savings category.
    pub fn add_expense(
        &mut self,
        category_id: &CategoryId,
        description: &str,
        amount: Money,
    ) -> Option<ExpenseId> {
        let description = description.trim();
        if category_id.as_str().is_empty() || description.is_empty() || !amount.is_positive() {
            return None;
        }
        match self.ledger.category(category_id) {
            Some(category) if !category.is_savings => {}
            _ => return None,
        }

        let id = self.fresh_expense_id();
        let date = self.generator.today();
        debug!(expense_id = %id, category_id = %category_id, amount = %amount, "expense added");

        self.ledger.expenses.push(Expense::new(
            id.clone(),
            category_id.clone(),
            description,
            amount,
            date,
        ));
        Some(id)
    }

    /// Remove an expense if present
    pub fn delete_expense(&mut self, id: &ExpenseId) -> Option<Expense> {
        let index = self.ledger.expenses.iter().position(|e| &e.id == id)?;
        debug!(expense_id = %id, "expense deleted");
        Some(self.ledger.expenses.remove(index))
    }

    fn fresh_category_id(&mut self) -> CategoryId {
        loop {
            let id = CategoryId::new(self.generator.next_id());
            if !id.is_savings() && !id.as_str().is_empty() && self.ledger.category(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_expense_id(&mut self) -> ExpenseId {
        loop {
            let id = ExpenseId::new(self.generator.next_id());
            if !id.as_str().is_empty() && self.ledger.expense(&id).is_none() {
                return id;
            }
        }
    }
}
