//! Wedding plan model
//!
//! A plan holds everything the allocation engine needs from the user: the
//! total budget, which categories are enabled (in the order they were
//! chosen), and the tier assigned to each. The most recent allocation run is
//! stored alongside it as a snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::catalog;
use super::ids::{AllocationRunId, CategoryId, PlanId};
use super::money::Money;
use super::tier::Tier;

/// The user's wedding budget plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingPlan {
    pub id: PlanId,

    /// Display name, e.g. "Sam & Alex"
    pub name: String,

    pub total_budget: Money,

    /// Enabled categories in selection order; the order feeds tie-breaking
    pub enabled_categories: Vec<CategoryId>,

    /// Explicit tier assignments. Missing entries mean IMPORTANT.
    #[serde(default)]
    pub tiers: BTreeMap<CategoryId, Tier>,

    /// Result of the most recent allocation run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<AllocationSnapshot>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeddingPlan {
    /// Create a plan with every catalog category enabled
    pub fn new(name: impl Into<String>, total_budget: Money) -> Self {
        let now = Utc::now();
        Self {
            id: PlanId::new(),
            name: name.into(),
            total_budget,
            enabled_categories: catalog().iter().map(|c| c.category_id()).collect(),
            tiers: BTreeMap::new(),
            allocation: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_budget(&mut self, total_budget: Money) {
        self.total_budget = total_budget;
        self.updated_at = Utc::now();
    }

    pub fn is_enabled(&self, id: &CategoryId) -> bool {
        self.enabled_categories.contains(id)
    }

    /// Enable a category, appending it to the selection order
    ///
    /// Returns false if it was already enabled.
    pub fn enable(&mut self, id: CategoryId) -> bool {
        if self.is_enabled(&id) {
            return false;
        }
        self.enabled_categories.push(id);
        self.updated_at = Utc::now();
        true
    }

    /// Disable a category. Its tier assignment is kept for re-enabling.
    ///
    /// Returns false if it was not enabled.
    pub fn disable(&mut self, id: &CategoryId) -> bool {
        let before = self.enabled_categories.len();
        self.enabled_categories.retain(|c| c != id);
        let changed = self.enabled_categories.len() != before;
        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }

    pub fn set_tier(&mut self, id: CategoryId, tier: Tier) {
        self.tiers.insert(id, tier);
        self.updated_at = Utc::now();
    }

    /// Remove an explicit tier, returning the category to the default
    pub fn clear_tier(&mut self, id: &CategoryId) -> Option<Tier> {
        let removed = self.tiers.remove(id);
        if removed.is_some() {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Tier for a category, defaulting to IMPORTANT
    pub fn tier_of(&self, id: &CategoryId) -> Tier {
        self.tiers.get(id).copied().unwrap_or_default()
    }

    /// Number of enabled categories in a tier, counting defaults
    pub fn tier_count(&self, tier: Tier) -> usize {
        self.enabled_categories
            .iter()
            .filter(|id| self.tier_of(id) == tier)
            .count()
    }

    /// Replace the stored allocation snapshot
    pub fn record_allocation(&mut self, snapshot: AllocationSnapshot) {
        self.allocation = Some(snapshot);
        self.updated_at = Utc::now();
    }

    /// Whether the stored allocation no longer matches the plan's inputs
    pub fn allocation_is_stale(&self) -> bool {
        match &self.allocation {
            None => false,
            Some(snapshot) => {
                snapshot.total_budget != self.total_budget
                    || snapshot.entries.len() != self.enabled_categories.len()
                    || snapshot
                        .entries
                        .iter()
                        .zip(&self.enabled_categories)
                        .any(|(entry, id)| {
                            &entry.category_id != id || entry.tier != self.tier_of(id)
                        })
            }
        }
    }

    /// Validate the plan
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.name.trim().is_empty() {
            return Err(PlanValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(PlanValidationError::NameTooLong(self.name.len()));
        }

        for (i, id) in self.enabled_categories.iter().enumerate() {
            if id.as_str().is_empty() {
                return Err(PlanValidationError::EmptyCategoryId);
            }
            if self.enabled_categories[..i].contains(id) {
                return Err(PlanValidationError::DuplicateCategory(id.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for WeddingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.total_budget)
    }
}

/// One category's share of an allocation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedCategory {
    pub category_id: CategoryId,
    /// Tier in effect when the run happened
    pub tier: Tier,
    pub amount: Money,
}

/// Persisted result of an allocation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSnapshot {
    pub run_id: AllocationRunId,
    pub generated_at: DateTime<Utc>,
    pub total_budget: Money,
    /// Entries in enabled-category order
    pub entries: Vec<AllocatedCategory>,
}

impl AllocationSnapshot {
    pub fn new(total_budget: Money, entries: Vec<AllocatedCategory>) -> Self {
        Self {
            run_id: AllocationRunId::new(),
            generated_at: Utc::now(),
            total_budget,
            entries,
        }
    }

    pub fn total_allocated(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn amount_for(&self, id: &CategoryId) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| &e.category_id == id)
            .map(|e| e.amount)
    }
}

/// Validation errors for plans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyCategoryId,
    DuplicateCategory(CategoryId),
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Plan name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Plan name too long ({} chars, max 100)", len),
            Self::EmptyCategoryId => write!(f, "Category ID cannot be empty"),
            Self::DuplicateCategory(id) => write!(f, "Category '{}' is enabled twice", id),
        }
    }
}

impl std::error::Error for PlanValidationError {}
