//! CSV export
//!
//! One row per allocated category, amounts in dollars with two decimals.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;

use super::json::AllocationReport;

/// Export the report's rows as CSV
pub fn export_report_csv<W: Write>(
    report: &AllocationReport,
    writer: &mut W,
) -> PlannerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Category ID", "Category", "Group", "Tier", "Base Weight", "Amount"])
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    for row in &report.rows {
        let weight = row
            .base_weight
            .map(|w| format!("{:.2}", w))
            .unwrap_or_default();
        let amount = Money::from_cents(row.amount_cents);
        let amount = format!("{}.{:02}", amount.dollars(), amount.cents_part());

        csv_writer
            .write_record([
                row.category_id.as_str(),
                row.name.as_str(),
                row.group.as_str(),
                row.tier.as_str(),
                weight.as_str(),
                amount.as_str(),
            ])
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::tests::allocated_plan;

    #[test]
    fn test_csv_export() {
        let report = AllocationReport::from_plan(&allocated_plan()).unwrap();
        let mut output = Vec::new();
        export_report_csv(&report, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Category ID,Category,Group,Tier,Base Weight,Amount");
        assert_eq!(lines[1], "cat_004,Photography,Core,TOP,0.12,6000.00");
        assert_eq!(lines[2], "photo_booth,photo_booth,,IMPORTANT,,4000.00");
        assert_eq!(lines.len(), 3);
    }
}
