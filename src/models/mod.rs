//! Core data models for the planner
//!
//! This module contains the data structures of the wedding budget domain:
//! the category catalog, priority tiers, money amounts and the user's plan.

pub mod category;
pub mod ids;
pub mod money;
pub mod plan;
pub mod tier;

pub use category::{
    catalog, catalog_base_weight, categories_in_group, category_group, category_name,
    find_master_category, CategoryGroup, MasterCategory,
};
pub use ids::{AllocationRunId, CategoryId, PlanId};
pub use money::{Money, MoneyParseError};
pub use plan::{AllocatedCategory, AllocationSnapshot, PlanValidationError, WeddingPlan};
pub use tier::{Tier, TierMultipliers, TierParseError};
