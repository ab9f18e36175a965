//! JSON export and the shared allocation report
//!
//! [`AllocationReport`] is the format-independent view of the stored
//! allocation that every exporter writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{catalog_base_weight, category_name, find_master_category, WeddingPlan};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// The stored allocation of a plan, ready for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub plan_name: String,
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub total_budget_cents: u64,
    /// The plan changed after this allocation was generated
    pub stale: bool,
    pub rows: Vec<ReportRow>,
}

/// One category in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub category_id: String,
    pub name: String,
    /// Catalog group, empty for custom categories
    pub group: String,
    pub tier: String,
    /// Catalog base weight; `None` for custom categories
    pub base_weight: Option<f64>,
    pub amount_cents: u64,
}

impl AllocationReport {
    /// Build a report from the plan's stored allocation
    pub fn from_plan(plan: &WeddingPlan) -> PlannerResult<Self> {
        let snapshot = plan.allocation.as_ref().ok_or_else(|| {
            PlannerError::Export("No allocation generated; run 'wedplan allocate' first".into())
        })?;

        let stale = plan.allocation_is_stale();
        if stale {
            tracing::warn!(run = %snapshot.run_id, "exporting an out-of-date allocation");
        }

        let rows = snapshot
            .entries
            .iter()
            .map(|entry| ReportRow {
                category_id: entry.category_id.to_string(),
                name: category_name(&entry.category_id),
                group: find_master_category(entry.category_id.as_str())
                    .map(|m| m.group.name().to_string())
                    .unwrap_or_default(),
                tier: entry.tier.to_string(),
                base_weight: catalog_base_weight(&entry.category_id),
                amount_cents: entry.amount.cents(),
            })
            .collect();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plan_name: plan.name.clone(),
            run_id: snapshot.run_id.to_string(),
            generated_at: snapshot.generated_at,
            total_budget_cents: snapshot.total_budget.cents(),
            stale,
            rows,
        })
    }

    pub fn total_allocated_cents(&self) -> u64 {
        self.rows.iter().map(|r| r.amount_cents).sum()
    }
}

/// Export the report as pretty-printed JSON
pub fn export_report_json<W: Write>(
    report: &AllocationReport,
    writer: &mut W,
) -> PlannerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;
    Ok(())
}
