//! Export module for the planner
//!
//! Exports the most recent allocation in multiple formats:
//! - CSV: one row per category (spreadsheet-compatible)
//! - JSON: machine-readable report with plan metadata
//! - YAML: human-readable report

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, AllocationReport, ReportRow, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::error::PlannerResult;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write a report in the given format
pub fn write_report<W: Write>(
    report: &AllocationReport,
    format: ExportFormat,
    writer: &mut W,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, writer),
        ExportFormat::Yaml => export_report_yaml(report, writer),
    }
}
