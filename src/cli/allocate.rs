//! Allocation CLI commands

use clap::Args;

use crate::config::Settings;
use crate::display::{
    format_allocation_table, format_diagnostics, format_group_summary, format_priority,
};
use crate::error::PlannerResult;
use crate::services::AllocationService;
use crate::storage::Storage;

/// Options for `allocate`
#[derive(Args, Debug, Default)]
pub struct AllocateArgs {
    /// Allocate even if the number of TOP categories is out of range
    #[arg(long)]
    pub force: bool,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,

    /// Also print effective weights, shares and remainders
    #[arg(long)]
    pub debug: bool,
}

/// Handle the allocate command
pub fn handle_allocate_command(
    storage: &Storage,
    settings: &Settings,
    args: AllocateArgs,
) -> PlannerResult<()> {
    let service = AllocationService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    if args.dry_run {
        let (plan, output) = service.preview()?;
        let priority = service.validate_priorities()?;
        let entries = AllocationService::entries_for(&plan, &output);

        println!("Preview (not saved)");
        println!("Priorities: {}", format_priority(&priority));
        println!();
        println!(
            "{}",
            format_allocation_table(&entries, plan.total_budget, symbol)
        );
        println!();
        println!(
            "{}",
            format_group_summary(&entries, plan.total_budget, symbol)
        );
        if args.debug {
            println!();
            print!("{}", format_diagnostics(&output.debug));
        }
        return Ok(());
    }

    let run = service.generate(args.force)?;

    if !run.priority.is_valid {
        eprintln!("Warning: {}", run.priority.message);
    }
    println!(
        "{}",
        format_allocation_table(&run.snapshot.entries, run.snapshot.total_budget, symbol)
    );
    println!();
    println!(
        "{}",
        format_group_summary(&run.snapshot.entries, run.snapshot.total_budget, symbol)
    );
    if args.debug {
        println!();
        print!("{}", format_diagnostics(&run.output.debug));
    }
    println!();
    println!("Allocation saved ({}).", run.snapshot.run_id);

    Ok(())
}

/// Handle the priorities command
pub fn handle_priorities_command(storage: &Storage, settings: &Settings) -> PlannerResult<()> {
    let priority = AllocationService::new(storage, settings).validate_priorities()?;
    println!("{}", priority.message);
    Ok(())
}
