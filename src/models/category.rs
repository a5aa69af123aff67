//! Category model
//!
//! A category is a named budget bucket. Exactly one category, the savings
//! category, is an accumulating pool instead of a spend-down budget.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Display name of the seeded savings category
pub const SAVINGS_CATEGORY_NAME: &str = "Savings";

/// Display color of the seeded savings category
pub const SAVINGS_COLOR: &str = "#10B981";

/// Color used when a stored category has none
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// A budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    /// Spending limit, or the accumulated pool for the savings category
    #[serde(default)]
    pub budget: Money,

    #[serde(default)]
    pub is_savings: bool,

    /// Display color as `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Category {
    /// Create a regular spending category
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        budget: Money,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            budget,
            is_savings: false,
            color: color.into(),
        }
    }

    /// The default savings category seeded into every new ledger
    pub fn savings() -> Self {
        Self {
            id: CategoryId::savings(),
            name: SAVINGS_CATEGORY_NAME.to_string(),
            budget: Money::zero(),
            is_savings: true,
            color: SAVINGS_COLOR.to_string(),
        }
    }

    /// Report label for the category kind
    pub fn kind_label(&self) -> &'static str {
        if self.is_savings {
            "Savings"
        } else {
            "Expense"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
