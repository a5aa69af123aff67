//! One line of the audit log

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::generate_diff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// What part of the ledger a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Income,
    Category,
    Expense,
    SavingsRate,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An applied ledger mutation.
///
/// Values are stored as JSON snapshots: `after` for creates, `before` for
/// deletes and both for updates, with `diff_summary` naming the changed
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Category name or expense description, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

fn snapshot<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

impl AuditEntry {
    fn stamped(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self::stamped(
            Operation::Create,
            entity_type,
            entity_id.into(),
            entity_name,
            None,
            snapshot(entity),
        )
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self::stamped(
            Operation::Update,
            entity_type,
            entity_id.into(),
            entity_name,
            snapshot(before),
            snapshot(after),
        )
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self::stamped(
            Operation::Delete,
            entity_type,
            entity_id.into(),
            entity_name,
            snapshot(entity),
            None,
        )
    }

    /// `[time] OP Kind id (name)`, plus a `Changes:` line for updates
    pub fn format_human_readable(&self) -> String {
        let name = self
            .entity_name
            .as_deref()
            .map(|n| format!(" ({})", n))
            .unwrap_or_default();
        let changes = self
            .diff_summary
            .as_deref()
            .map(|d| format!("\n  Changes: {}", d))
            .unwrap_or_default();

        format!(
            "[{}] {} {} {}{}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            name,
            changes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::SavingsRate.to_string(), "SavingsRate");
    }

    #[test]
    fn test_create_keeps_only_after() {
        let entry = AuditEntry::create(
            EntityType::Category,
            "1",
            Some("Food".to_string()),
            &json!({"name": "Food", "budget": 800}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!({"name": "Food", "budget": 800})));
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_update_derives_diff() {
        let entry = AuditEntry::update(
            EntityType::Category,
            "1",
            Some("Food".to_string()),
            &json!({"name": "Food", "budget": 800}),
            &json!({"name": "Food", "budget": 0}),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.diff_summary, Some("budget: 800 -> 0".to_string()));
    }

    #[test]
    fn test_delete_keeps_only_before() {
        let entry = AuditEntry::delete(EntityType::Expense, "7", None, &json!({"amount": 50}));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_entity_type_is_snake_case_on_disk() {
        let entry = AuditEntry::create(EntityType::SavingsRate, "savings", None, &json!(6.0));

        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"savings_rate\""));
        assert!(!line.contains("entity_name"));
        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.entity_type, EntityType::SavingsRate);
    }

    #[test]
    fn test_human_readable_update() {
        let entry = AuditEntry::update(
            EntityType::Income,
            "income",
            None,
            &json!(3000.0),
            &json!(5000.0),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Income income"));
        assert!(formatted.contains("Changes: 3000.0 -> 5000.0"));
    }
}
