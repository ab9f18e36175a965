//! CLI command for exporting the allocation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::export::{write_report, AllocationReport, ExportFormat};
use crate::storage::Storage;

/// Options for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> PlannerResult<()> {
    let plan = storage.plan.require()?;
    let report = AllocationReport::from_plan(&plan)?;
    let format = args.format.unwrap_or(settings.default_export_format);

    if report.stale {
        eprintln!("Warning: the plan has changed since this allocation was generated.");
    }

    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                PlannerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&report, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| PlannerError::Export(e.to_string()))?;
            println!(
                "Exported {} categories ({}) to: {}",
                report.rows.len(),
                format,
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&report, format, &mut writer)?;
        }
    }

    Ok(())
}
