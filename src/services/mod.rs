//! Service layer for the planner
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, audit logging, and the bridge into the allocation engine.

pub mod allocation;
pub mod plan;

pub use allocation::{AllocationRun, AllocationService};
pub use plan::PlanService;
