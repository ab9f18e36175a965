//! Plan CLI commands
//!
//! Implements CLI commands for editing the plan: budget, enabled categories
//! and tiers.

use clap::Subcommand;

use crate::allocation::validate_priority_count;
use crate::config::Settings;
use crate::display::format_plan_summary;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{category_name, Money, Tier};
use crate::services::PlanService;
use crate::storage::Storage;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the plan and its enabled categories
    Show,

    /// Set the total budget
    Budget {
        /// Amount (e.g., "30000", "30,000.00" or "$30000")
        amount: String,
    },

    /// Enable categories by catalog ID or name
    Enable {
        /// Category IDs or names
        #[arg(required = true)]
        categories: Vec<String>,
        /// Accept IDs that are not in the catalog as custom categories
        #[arg(long)]
        custom: bool,
    },

    /// Disable categories
    Disable {
        /// Category IDs or names
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Assign a tier to a category
    Tier {
        /// Category ID or name
        category: String,
        /// TOP, IMPORTANT or NICE
        tier: Tier,
    },

    /// Reset a category to the default tier
    #[command(name = "clear-tier")]
    ClearTier {
        /// Category ID or name
        category: String,
    },
}

/// Parse a budget amount from the command line
pub fn parse_amount(amount: &str) -> PlannerResult<Money> {
    Money::parse(amount).map_err(|e| PlannerError::Validation(format!("Invalid amount: {}", e)))
}

/// Handle a plan command
pub fn handle_plan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PlanCommands,
) -> PlannerResult<()> {
    let service = PlanService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PlanCommands::Show => {
            let plan = service.get()?;
            let priority = validate_priority_count(&plan.tiers, &plan.enabled_categories);
            print!("{}", format_plan_summary(&plan, &priority, symbol));
        }

        PlanCommands::Budget { amount } => {
            let plan = service.set_budget(parse_amount(&amount)?)?;
            println!(
                "Budget set to {}",
                plan.total_budget.format_with_symbol(symbol)
            );
            if plan.allocation.is_some() {
                println!("Run 'wedplan allocate' to update the allocation.");
            }
        }

        PlanCommands::Enable { categories, custom } => {
            let enabled = service.enable(&categories, custom)?;
            if enabled.is_empty() {
                println!("No changes: categories already enabled.");
            }
            for id in enabled {
                println!("Enabled: {} ({})", category_name(&id), id);
            }
        }

        PlanCommands::Disable { categories } => {
            for id in service.disable(&categories)? {
                println!("Disabled: {} ({})", category_name(&id), id);
            }
        }

        PlanCommands::Tier { category, tier } => {
            let (id, previous) = service.set_tier(&category, tier)?;
            println!("{}: {} -> {}", category_name(&id), previous, tier);
        }

        PlanCommands::ClearTier { category } => {
            let (id, removed) = service.clear_tier(&category)?;
            match removed {
                Some(previous) => println!(
                    "{}: {} -> {} (default)",
                    category_name(&id),
                    previous,
                    Tier::default()
                ),
                None => println!("{} already uses the default tier.", category_name(&id)),
            }
        }
    }

    Ok(())
}
