//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allocate;
pub mod audit;
pub mod catalog;
pub mod export;
pub mod plan;

pub use allocate::{handle_allocate_command, handle_priorities_command, AllocateArgs};
pub use audit::handle_audit_command;
pub use catalog::handle_catalog_command;
pub use export::{handle_export_command, ExportArgs};
pub use plan::{handle_plan_command, parse_amount, PlanCommands};
