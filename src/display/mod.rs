//! Display formatting for terminal output
//!
//! Provides utilities for formatting the catalog, the plan and allocation
//! results for terminal display.

pub mod allocation;
pub mod catalog;
pub mod plan;

pub use allocation::{
    format_allocation_table, format_diagnostics, format_group_summary, group_totals, GroupTotal,
};
pub use catalog::format_catalog;
pub use plan::{format_plan_summary, format_priority};
