//! YAML export

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};

use super::json::AllocationReport;

/// Export the report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(
    report: &AllocationReport,
    writer: &mut W,
) -> PlannerResult<()> {
    writeln!(writer, "# Wedding budget allocation for {}", report.plan_name)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", report.generated_at)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    if report.stale {
        writeln!(writer, "# Note: the plan has changed since this allocation was generated")
            .map_err(|e| PlannerError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| PlannerError::Yaml(e.to_string()))?;

    Ok(())
}
