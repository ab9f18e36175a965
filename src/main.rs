use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wedding_budget::cli::{
    handle_allocate_command, handle_audit_command, handle_catalog_command,
    handle_export_command, handle_plan_command, handle_priorities_command, parse_amount,
    AllocateArgs, ExportArgs, PlanCommands,
};
use wedding_budget::config::{paths::PlannerPaths, settings::Settings};
use wedding_budget::services::PlanService;
use wedding_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "wedplan",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based wedding budget planner",
    long_about = "wedplan splits a wedding budget across the categories you care \
                  about. Pick categories, mark your top priorities, and let it \
                  work out how much each one gets, down to the cent."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new plan with every catalog category enabled
    Init {
        /// Plan name (e.g., "Sam & Alex")
        #[arg(short, long)]
        name: String,
        /// Total budget (e.g., "30000" or "$30,000.00")
        #[arg(short, long)]
        budget: String,
    },

    /// Show current configuration and paths
    Config,

    /// List the built-in wedding categories
    Catalog,

    /// Plan management commands
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Check the number of TOP priorities
    Priorities,

    /// Split the budget across enabled categories
    Allocate(AllocateArgs),

    /// Export the last allocation
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { name, budget }) => {
            let plan = PlanService::new(&storage).init(&name, parse_amount(&budget)?)?;
            settings.save(&paths)?;
            println!("Created plan: {}", plan.name);
            println!(
                "  Budget: {}",
                plan.total_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "  Categories: all {} catalog categories enabled",
                plan.enabled_categories.len()
            );
            println!();
            println!("Next, mark 3 to 5 top priorities with 'wedplan plan tier <category> top'.");
        }
        Some(Commands::Config) => {
            println!("wedplan Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Plan file:        {}", paths.plan_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            let multipliers = settings.effective_multipliers();
            println!(
                "  Tier multipliers: TOP {} / IMPORTANT {} / NICE {}{}",
                multipliers.top,
                multipliers.important,
                multipliers.nice,
                if settings.tier_multipliers.is_some() {
                    " (custom)"
                } else {
                    ""
                }
            );
            println!(
                "  Enforce priority count: {}",
                settings.enforce_priority_count
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default export format: {}", settings.default_export_format);
        }
        Some(Commands::Catalog) => {
            handle_catalog_command(&storage)?;
        }
        Some(Commands::Plan(cmd)) => {
            handle_plan_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Priorities) => {
            handle_priorities_command(&storage, &settings)?;
        }
        Some(Commands::Allocate(args)) => {
            handle_allocate_command(&storage, &settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &settings, args)?;
        }
        Some(Commands::Audit { count }) => {
            handle_audit_command(&storage, count)?;
        }
        None => {
            println!("wedplan - Terminal-based wedding budget planner");
            println!();
            println!("Run 'wedplan --help' for usage information.");
            println!("Run 'wedplan init --name <NAME> --budget <AMOUNT>' to get started.");
        }
    }

    Ok(())
}
