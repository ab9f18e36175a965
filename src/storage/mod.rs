//! Storage layer for the planner
//!
//! Provides JSON file storage with atomic writes and the audit trail.

pub mod file_io;
pub mod plan;

pub use file_io::{read_json_optional, write_json_atomic};
pub use plan::PlanRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PlannerPaths;
use crate::error::PlannerResult;

/// Storage coordinator: the plan repository plus the audit logger
pub struct Storage {
    paths: PlannerPaths,
    pub plan: PlanRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create storage rooted at `paths`, creating directories as needed
    pub fn new(paths: PlannerPaths) -> PlannerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            plan: PlanRepository::new(paths.plan_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &PlannerPaths {
        &self.paths
    }

    pub fn load_all(&mut self) -> PlannerResult<()> {
        self.plan.load()
    }

    pub fn save_all(&self) -> PlannerResult<()> {
        self.plan.save()
    }

    pub fn is_initialized(&self) -> PlannerResult<bool> {
        self.plan.exists()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a newly created entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PlannerResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a change to an entity
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> PlannerResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record several entries at once
    pub fn log_batch(&self, entries: &[AuditEntry]) -> PlannerResult<()> {
        self.audit.log_batch(entries)
    }
}
