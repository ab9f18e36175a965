//! Plan repository for JSON storage
//!
//! Manages loading and saving the wedding plan to plan.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{PlannerError, PlannerResult};
use crate::models::WeddingPlan;

use super::file_io::{read_json_optional, write_json_atomic};

/// Repository for the single wedding plan
pub struct PlanRepository {
    path: PathBuf,
    plan: RwLock<Option<WeddingPlan>>,
}

impl PlanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            plan: RwLock::new(None),
        }
    }

    /// Load the plan from disk; a missing file leaves the repository empty
    pub fn load(&self) -> PlannerResult<()> {
        let loaded: Option<WeddingPlan> = read_json_optional(&self.path)?;

        let mut plan = self
            .plan
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *plan = loaded;

        Ok(())
    }

    /// Save the plan to disk. Does nothing if no plan exists yet.
    pub fn save(&self) -> PlannerResult<()> {
        let plan = self
            .plan
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        match plan.as_ref() {
            Some(plan) => write_json_atomic(&self.path, plan),
            None => Ok(()),
        }
    }

    pub fn get(&self) -> PlannerResult<Option<WeddingPlan>> {
        let plan = self
            .plan
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(plan.clone())
    }

    /// Get the plan, failing if `init` has not been run
    pub fn require(&self) -> PlannerResult<WeddingPlan> {
        self.get()?.ok_or_else(PlannerError::plan_not_initialized)
    }

    /// Replace the stored plan after validating it
    pub fn replace(&self, new_plan: WeddingPlan) -> PlannerResult<()> {
        new_plan
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        let mut plan = self
            .plan
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *plan = Some(new_plan);

        Ok(())
    }

    pub fn exists(&self) -> PlannerResult<bool> {
        Ok(self.get()?.is_some())
    }
}
