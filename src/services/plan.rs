//! Plan service
//!
//! Business logic for setting up a wedding plan: creating it, changing the
//! total budget, choosing which categories are enabled and assigning tiers.
//! Every change is saved immediately and written to the audit log.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{category_name, find_master_category, CategoryId, Money, Tier, WeddingPlan};
use crate::storage::Storage;

/// Service for plan management
pub struct PlanService<'a> {
    storage: &'a Storage,
}

impl<'a> PlanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the plan with every catalog category enabled
    pub fn init(&self, name: &str, total_budget: Money) -> PlannerResult<WeddingPlan> {
        let name = name.trim();
        if let Some(existing) = self.storage.plan.get()? {
            return Err(PlannerError::Duplicate {
                entity_type: "Plan",
                identifier: existing.name,
            });
        }

        let plan = WeddingPlan::new(name, total_budget);
        self.storage.plan.replace(plan.clone())?;
        self.storage.plan.save()?;

        self.storage.log_create(
            EntityType::Plan,
            plan.id.to_string(),
            Some(plan.name.clone()),
            &plan,
        )?;

        tracing::info!(plan = %plan.id, budget = plan.total_budget.cents(), "plan created");
        Ok(plan)
    }

    pub fn get(&self) -> PlannerResult<WeddingPlan> {
        self.storage.plan.require()
    }

    /// Change the total budget
    pub fn set_budget(&self, total_budget: Money) -> PlannerResult<WeddingPlan> {
        let mut plan = self.get()?;
        let before = plan.total_budget;
        plan.set_budget(total_budget);

        self.storage.plan.replace(plan.clone())?;
        self.storage.plan.save()?;

        self.storage.log_update(
            EntityType::Plan,
            plan.id.to_string(),
            Some(plan.name.clone()),
            &before,
            &plan.total_budget,
            Some(format!("budget: {} -> {}", before, plan.total_budget)),
        )?;

        Ok(plan)
    }

    /// Enable categories by catalog ID or name
    ///
    /// Keys that are not in the catalog are rejected unless `allow_custom` is
    /// set, in which case they are enabled as custom categories (these use
    /// the default base weight). Returns the categories that were newly
    /// enabled; already-enabled ones are skipped.
    pub fn enable(&self, keys: &[String], allow_custom: bool) -> PlannerResult<Vec<CategoryId>> {
        let mut plan = self.get()?;

        let ids = keys
            .iter()
            .map(|key| resolve_for_enable(key, allow_custom))
            .collect::<PlannerResult<Vec<_>>>()?;

        let newly_enabled: Vec<CategoryId> =
            ids.into_iter().filter(|id| plan.enable(id.clone())).collect();

        if newly_enabled.is_empty() {
            return Ok(newly_enabled);
        }

        self.storage.plan.replace(plan.clone())?;
        self.storage.plan.save()?;
        self.log_selection(&newly_enabled, false, true)?;

        Ok(newly_enabled)
    }

    /// Disable enabled categories by ID or catalog name
    pub fn disable(&self, keys: &[String]) -> PlannerResult<Vec<CategoryId>> {
        let mut plan = self.get()?;

        let ids = keys
            .iter()
            .map(|key| resolve_enabled(&plan, key))
            .collect::<PlannerResult<Vec<_>>>()?;

        let disabled: Vec<CategoryId> = ids.into_iter().filter(|id| plan.disable(id)).collect();

        if disabled.is_empty() {
            return Ok(disabled);
        }

        self.storage.plan.replace(plan.clone())?;
        self.storage.plan.save()?;
        self.log_selection(&disabled, true, false)?;

        Ok(disabled)
    }

    /// Assign a tier to an enabled category, returning its previous tier
    pub fn set_tier(&self, key: &str, tier: Tier) -> PlannerResult<(CategoryId, Tier)> {
        let mut plan = self.get()?;
        let id = resolve_enabled(&plan, key)?;
        let previous = plan.tier_of(&id);

        plan.set_tier(id.clone(), tier);
        self.storage.plan.replace(plan)?;
        self.storage.plan.save()?;

        self.storage.log_update(
            EntityType::TierAssignment,
            id.to_string(),
            Some(category_name(&id)),
            &previous,
            &tier,
            Some(format!("tier: {} -> {}", previous, tier)),
        )?;

        Ok((id, previous))
    }

    /// Remove an explicit tier so the category falls back to IMPORTANT
    pub fn clear_tier(&self, key: &str) -> PlannerResult<(CategoryId, Option<Tier>)> {
        let mut plan = self.get()?;
        let id = resolve_enabled(&plan, key)?;
        let removed = plan.clear_tier(&id);

        if let Some(previous) = removed {
            self.storage.plan.replace(plan)?;
            self.storage.plan.save()?;

            self.storage.log_update(
                EntityType::TierAssignment,
                id.to_string(),
                Some(category_name(&id)),
                &previous,
                &Tier::default(),
                Some(format!("tier: {} -> {} (default)", previous, Tier::default())),
            )?;
        }

        Ok((id, removed))
    }

    fn log_selection(&self, ids: &[CategoryId], before: bool, after: bool) -> PlannerResult<()> {
        let entries: Vec<AuditEntry> = ids
            .iter()
            .map(|id| {
                AuditEntry::update(
                    EntityType::CategorySelection,
                    id.to_string(),
                    Some(category_name(id)),
                    &before,
                    &after,
                    Some(format!("enabled: {} -> {}", before, after)),
                )
            })
            .collect();
        self.storage.log_batch(&entries)
    }
}

fn resolve_for_enable(key: &str, allow_custom: bool) -> PlannerResult<CategoryId> {
    if let Some(master) = find_master_category(key) {
        return Ok(master.category_id());
    }

    let key = key.trim();
    if key.is_empty() {
        return Err(PlannerError::Validation("Category ID cannot be empty".into()));
    }

    if allow_custom {
        Ok(CategoryId::from(key))
    } else {
        Err(PlannerError::category_not_found(key))
    }
}

/// Resolve a key to a category that is currently enabled in the plan
fn resolve_enabled(plan: &WeddingPlan, key: &str) -> PlannerResult<CategoryId> {
    let key = key.trim();
    let id = find_master_category(key)
        .map(|m| m.category_id())
        .unwrap_or_else(|| CategoryId::from(key));

    if plan.is_enabled(&id) {
        Ok(id)
    } else {
        Err(PlannerError::Validation(format!(
            "Category '{}' is not enabled",
            key
        )))
    }
}
