//! YAML snapshot export, for a human-readable copy of the ledger

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::models::Ledger;

/// Export the full ledger as YAML with a short comment header
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::from_ledger(ledger);
    let io_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# budget-tracker ledger export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_yaml_export() {
        let mut ledger = Ledger::seeded(4.0);
        ledger.income = Money::from_units(3200);

        let mut out = Vec::new();
        export_full_yaml(&ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# budget-tracker ledger export"));
        assert!(text.contains("savingsAnnualRate: 4.0"));
        assert!(text.contains("isSavings: true"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.ledger, ledger);
    }
}
