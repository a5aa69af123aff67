//! Ledger state and its derivations
//!
//! The ledger is the whole persisted state: income, categories, expenses and
//! the savings rate. Everything shown to the user (spent, balances, totals,
//! usage, savings projection) is derived from it on demand and never cached.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use super::category::Category;
use super::expense::Expense;
use super::ids::{CategoryId, ExpenseId};
use super::money::{deserialize_lenient_f64, Money};

/// Annual savings rate (percent) of a freshly seeded ledger
pub const DEFAULT_SAVINGS_RATE: f64 = 5.0;

/// Clamp an annual rate into the 0-100 percent range; NaN becomes 0
pub fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 100.0)
    }
}

/// Lenient parse of a percentage typed by the user ("6", "6.5%"); garbage is 0
pub fn coerce_rate(input: &str) -> f64 {
    let parsed = input
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .unwrap_or(0.0);
    clamp_rate(parsed)
}

fn deserialize_rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    deserialize_lenient_f64(deserializer).map(clamp_rate)
}

/// The complete persisted budgeting state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ledger {
    pub income: Money,

    pub categories: Vec<Category>,

    pub expenses: Vec<Expense>,

    /// Annual interest rate on the savings pool, in percent
    #[serde(deserialize_with = "deserialize_rate")]
    pub savings_annual_rate: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::seeded(DEFAULT_SAVINGS_RATE)
    }
}

/// Per-category figures as shown on the dashboard and in the report
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStatus {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub is_savings: bool,
    pub budget: Money,
    pub spent: Money,
    pub balance: Money,
    /// `None` for the savings category
    pub usage_percent: Option<f64>,
}

impl CategoryStatus {
    pub fn is_over_budget(&self) -> bool {
        !self.is_savings && self.balance.is_negative()
    }
}

/// Dashboard snapshot of the ledger totals
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub income: Money,
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub unallocated: Money,
    pub savings_pool: Money,
    pub savings_annual_rate: f64,
    pub monthly_savings_earnings: Money,
    pub annual_savings_earnings: Money,
    pub category_count: usize,
    pub expense_count: usize,
}

impl Ledger {
    /// An empty ledger holding only the savings category
    pub fn seeded(savings_annual_rate: f64) -> Self {
        Self {
            income: Money::zero(),
            categories: vec![Category::savings()],
            expenses: Vec::new(),
            savings_annual_rate: clamp_rate(savings_annual_rate),
        }
    }

    /// Leave exactly one savings category: extra flags are cleared and a
    /// missing one is re-seeded.
    ///
    /// Returns true if the ledger was changed.
    pub fn ensure_savings_category(&mut self) -> bool {
        if let Some(first) = self.categories.iter().position(|c| c.is_savings) {
            let mut changed = false;
            for category in self.categories.iter_mut().skip(first + 1) {
                if category.is_savings {
                    category.is_savings = false;
                    changed = true;
                }
            }
            return changed;
        }

        // A category still carrying the reserved id is promoted in place
        if let Some(existing) = self.categories.iter_mut().find(|c| c.id.is_savings()) {
            existing.is_savings = true;
        } else {
            self.categories.insert(0, Category::savings());
        }
        true
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub(crate) fn category_mut(&mut self, id: &CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| &c.id == id)
    }

    /// Find a category by id, falling back to a case-insensitive name match
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let identifier = identifier.trim();
        if let Some(category) = self.categories.iter().find(|c| c.id.as_str() == identifier) {
            return Some(category);
        }

        let name_lower = identifier.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
    }

    /// The savings category, by flag first and then by reserved id
    pub fn savings_category(&self) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.is_savings)
            .or_else(|| self.categories.iter().find(|c| c.id.is_savings()))
    }

    /// Categories that expenses may be recorded against
    pub fn spendable_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_savings)
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Expenses recorded against a category, in insertion order
    pub fn category_expenses(&self, id: &CategoryId) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| &e.category_id == id)
            .collect()
    }

    /// All expenses, most recent date first (stable for equal dates)
    pub fn expenses_newest_first(&self) -> Vec<&Expense> {
        let mut list: Vec<_> = self.expenses.iter().collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    /// Sum of the amounts of expenses recorded against `id`
    pub fn spent(&self, id: &CategoryId) -> Money {
        self.expenses
            .iter()
            .filter(|e| &e.category_id == id)
            .map(|e| e.amount)
            .sum()
    }

    /// Remaining balance; the savings category reports its pool unchanged.
    ///
    /// `None` if no category has this id.
    pub fn balance(&self, id: &CategoryId) -> Option<Money> {
        let category = self.category(id)?;
        if category.is_savings {
            Some(category.budget)
        } else {
            Some(category.budget - self.spent(id))
        }
    }

    /// Spent as a percentage of budget; `None` for savings or unknown ids
    pub fn usage_percent(&self, id: &CategoryId) -> Option<f64> {
        let category = self.category(id)?;
        if category.is_savings {
            return None;
        }
        Some(self.spent(id).percent_of(category.budget))
    }

    /// Sum of every category budget, savings included
    pub fn total_budgeted(&self) -> Money {
        self.categories.iter().map(|c| c.budget).sum()
    }

    /// Sum of expenses against existing non-savings categories
    pub fn total_spent(&self) -> Money {
        let spendable: HashSet<&CategoryId> = self.spendable_categories().map(|c| &c.id).collect();
        self.expenses
            .iter()
            .filter(|e| spendable.contains(&e.category_id))
            .map(|e| e.amount)
            .sum()
    }

    /// Income not yet assigned to a category (may be negative)
    pub fn unallocated(&self) -> Money {
        self.income - self.total_budgeted()
    }

    /// Current savings pool, zero if there is no savings category
    pub fn savings_pool(&self) -> Money {
        self.savings_category()
            .map(|c| c.budget)
            .unwrap_or_default()
    }

    /// Simple (non-compounding) monthly interest projected on the pool
    pub fn monthly_savings_earnings(&self) -> Money {
        Money::from_f64(self.savings_pool().as_f64() * self.savings_annual_rate / 100.0 / 12.0)
    }

    /// Twelve months of the simple monthly projection
    pub fn annual_savings_earnings(&self) -> Money {
        Money::from_f64(self.savings_pool().as_f64() * self.savings_annual_rate / 100.0)
    }

    /// Figures for one category
    pub fn category_status(&self, category: &Category) -> CategoryStatus {
        let spent = self.spent(&category.id);
        let (balance, usage_percent) = if category.is_savings {
            (category.budget, None)
        } else {
            (category.budget - spent, Some(spent.percent_of(category.budget)))
        };

        CategoryStatus {
            id: category.id.clone(),
            name: category.name.clone(),
            color: category.color.clone(),
            is_savings: category.is_savings,
            budget: category.budget,
            spent,
            balance,
            usage_percent,
        }
    }

    /// Figures for every category, in ledger order
    pub fn category_statuses(&self) -> Vec<CategoryStatus> {
        self.categories
            .iter()
            .map(|c| self.category_status(c))
            .collect()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            income: self.income,
            total_budgeted: self.total_budgeted(),
            total_spent: self.total_spent(),
            unallocated: self.unallocated(),
            savings_pool: self.savings_pool(),
            savings_annual_rate: self.savings_annual_rate,
            monthly_savings_earnings: self.monthly_savings_earnings(),
            annual_savings_earnings: self.annual_savings_earnings(),
            category_count: self.categories.len(),
            expense_count: self.expenses.len(),
        }
    }
}
