//! Allocation service
//!
//! Bridges the stored plan and the pure allocation engine: builds the engine
//! input from the plan and catalog, applies the priority-count policy from
//! the settings, and records each run on the plan and in the audit log.

use crate::allocation::{
    calculate_allocations, validate_priority_count, AllocationInput, AllocationOutput,
    PriorityValidation,
};
use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    catalog_base_weight, AllocatedCategory, AllocationSnapshot, Money, TierMultipliers,
    WeddingPlan,
};
use crate::storage::Storage;

/// Service for generating allocations
pub struct AllocationService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

/// Result of a generated allocation run
#[derive(Debug, Clone)]
pub struct AllocationRun {
    /// What was stored on the plan
    pub snapshot: AllocationSnapshot,
    /// Raw engine output, including diagnostics
    pub output: AllocationOutput,
    /// Priority check as it stood when the run was made
    pub priority: PriorityValidation,
}

impl<'a> AllocationService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Build the engine input for a plan
    ///
    /// Catalog categories carry their catalog base weight; custom categories
    /// get none and fall back to the engine default. Tier assignments for
    /// disabled categories are left out.
    pub fn build_input(plan: &WeddingPlan, multipliers: TierMultipliers) -> AllocationInput {
        let mut input =
            AllocationInput::new(plan.total_budget.cents()).with_multipliers(multipliers);
        for id in &plan.enabled_categories {
            input = input.with_category(
                id.clone(),
                catalog_base_weight(id),
                plan.tiers.get(id).copied(),
            );
        }
        input
    }

    /// Engine output as per-category entries in enabled order
    pub fn entries_for(plan: &WeddingPlan, output: &AllocationOutput) -> Vec<AllocatedCategory> {
        plan.enabled_categories
            .iter()
            .map(|id| AllocatedCategory {
                category_id: id.clone(),
                tier: plan.tier_of(id),
                amount: Money::from_cents(output.allocation_for(id.as_str()).unwrap_or(0)),
            })
            .collect()
    }

    /// Check the TOP-tier count of the stored plan
    pub fn validate_priorities(&self) -> PlannerResult<PriorityValidation> {
        let plan = self.storage.plan.require()?;
        Ok(validate_priority_count(&plan.tiers, &plan.enabled_categories))
    }

    /// Calculate an allocation without storing it
    pub fn preview(&self) -> PlannerResult<(WeddingPlan, AllocationOutput)> {
        let plan = self.storage.plan.require()?;
        if plan.enabled_categories.is_empty() {
            return Err(PlannerError::Allocation("No enabled categories".into()));
        }

        let input = Self::build_input(&plan, self.settings.effective_multipliers());
        let output = calculate_allocations(&input);
        Ok((plan, output))
    }

    /// Calculate an allocation and store it on the plan
    ///
    /// When priority enforcement is on, an out-of-range TOP count is an
    /// error unless `force` is set.
    pub fn generate(&self, force: bool) -> PlannerResult<AllocationRun> {
        let priority = self.validate_priorities()?;
        if !priority.is_valid && self.settings.enforce_priority_count && !force {
            return Err(PlannerError::Priority {
                top_count: priority.top_count,
                message: priority.message,
            });
        }

        let (mut plan, output) = self.preview()?;

        let snapshot =
            AllocationSnapshot::new(plan.total_budget, Self::entries_for(&plan, &output));

        if snapshot.total_allocated() != plan.total_budget {
            return Err(PlannerError::Allocation(format!(
                "Allocated {} of {}",
                snapshot.total_allocated(),
                plan.total_budget
            )));
        }

        plan.record_allocation(snapshot.clone());
        self.storage.plan.replace(plan.clone())?;
        self.storage.plan.save()?;

        let summary = format!(
            "{} across {} categories ({} TOP)",
            snapshot.total_budget,
            snapshot.entries.len(),
            priority.top_count
        );
        self.storage.audit().log(&AuditEntry::generate(
            snapshot.run_id.to_string(),
            Some(plan.name.clone()),
            &snapshot,
            summary,
        ))?;

        tracing::info!(
            run = %snapshot.run_id,
            total_cents = snapshot.total_budget.cents(),
            categories = snapshot.entries.len(),
            forced = force && !priority.is_valid,
            "allocation generated"
        );

        Ok(AllocationRun {
            snapshot,
            output,
            priority,
        })
    }
}
