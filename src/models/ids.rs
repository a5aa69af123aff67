//! Strongly-typed ID wrappers for ledger entities
//!
//! Ids are opaque strings on the wire. Newtype wrappers keep category and
//! expense ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Macro to generate string ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ExpenseId);

/// Reserved id of the savings category
pub const SAVINGS_CATEGORY_ID: &str = "savings";

impl CategoryId {
    /// The reserved id of the savings category
    pub fn savings() -> Self {
        Self(SAVINGS_CATEGORY_ID.to_string())
    }

    /// Whether this is the reserved savings id
    pub fn is_savings(&self) -> bool {
        self.0 == SAVINGS_CATEGORY_ID
    }
}
