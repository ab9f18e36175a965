//! Budget allocation engine
//!
//! Splits a total budget (in cents) across the enabled categories of a plan.
//! The split is proportional to each category's effective weight (base weight
//! scaled by its tier multiplier), always sums exactly to the total, and is
//! deterministic for identical inputs, including the order categories are
//! supplied in.
//!
//! # Pipeline
//!
//! - [`weights`]: resolves effective weights, defaulting missing base
//!   weights to [`DEFAULT_BASE_WEIGHT`] and missing tiers to IMPORTANT.
//! - [`proportional`]: computes shares and floors them to whole cents.
//! - [`remainder`]: hands the lost cents to the largest fractional
//!   remainders, ties broken by supply order.
//!
//! [`priority`] is a separate advisory check on the number of TOP categories.
//!
//! Everything here is pure: no I/O, no shared state, no errors.
//!
//! # Example
//!
//! ```
//! use wedding_budget::allocation::{calculate_allocations, AllocationInput};
//! use wedding_budget::models::Tier;
//!
//! let input = AllocationInput::new(3_000_000)
//!     .with_category("cat1", Some(0.25), Some(Tier::Top))
//!     .with_category("cat2", Some(0.20), Some(Tier::Important))
//!     .with_category("cat3", Some(0.15), Some(Tier::Nice));
//!
//! let output = calculate_allocations(&input);
//! assert_eq!(output.total_allocated(), 3_000_000);
//! ```

pub mod priority;
pub mod proportional;
pub mod remainder;
pub mod weights;

pub use priority::{
    validate_priority_count, PriorityStatus, PriorityValidation, MAX_TOP_PRIORITIES,
    MIN_TOP_PRIORITIES,
};
pub use remainder::RoundingRemainder;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{CategoryId, Tier, TierMultipliers};

use proportional::allocate_proportionally;
use remainder::distribute_remainders;
use weights::resolve_weights;

/// Base weight used for enabled categories with no weight of their own
pub const DEFAULT_BASE_WEIGHT: f64 = 0.3;

/// Everything the engine needs for one allocation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationInput {
    pub total_budget_cents: u64,
    /// Enabled categories; the order breaks remainder ties
    pub enabled_category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub base_weights: BTreeMap<CategoryId, f64>,
    #[serde(default)]
    pub tier_by_category_id: BTreeMap<CategoryId, Tier>,
    /// Replaces the default multiplier table as a whole
    #[serde(default)]
    pub tier_multipliers: Option<TierMultipliers>,
}

impl AllocationInput {
    pub fn new(total_budget_cents: u64) -> Self {
        Self {
            total_budget_cents,
            ..Self::default()
        }
    }

    /// Enable a category, optionally with its base weight and tier
    pub fn with_category(
        mut self,
        id: impl Into<CategoryId>,
        base_weight: Option<f64>,
        tier: Option<Tier>,
    ) -> Self {
        let id = id.into();
        if let Some(weight) = base_weight {
            self.base_weights.insert(id.clone(), weight);
        }
        if let Some(tier) = tier {
            self.tier_by_category_id.insert(id.clone(), tier);
        }
        self.enabled_category_ids.push(id);
        self
    }

    pub fn with_multipliers(mut self, multipliers: TierMultipliers) -> Self {
        self.tier_multipliers = Some(multipliers);
        self
    }
}

/// Intermediate values from a run, for auditing and tests
///
/// Side information only; the allocations are the authoritative result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationDiagnostics {
    pub sum_effective_weights: f64,
    pub effective_weights_by_category_id: BTreeMap<CategoryId, f64>,
    pub shares_by_category_id: BTreeMap<CategoryId, f64>,
    /// Positive remainders, largest first, in the order cents were granted
    pub rounding_remainders: Vec<RoundingRemainder>,
    /// True when all weights were zero and the budget was split evenly
    #[serde(default)]
    pub equal_split_fallback: bool,
}

/// Result of [`calculate_allocations`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutput {
    pub allocations_by_category_id: BTreeMap<CategoryId, u64>,
    pub debug: AllocationDiagnostics,
}

impl AllocationOutput {
    pub fn total_allocated(&self) -> u64 {
        self.allocations_by_category_id.values().sum()
    }

    pub fn allocation_for(&self, id: &str) -> Option<u64> {
        self.allocations_by_category_id.get(id).copied()
    }
}

/// Split the budget across the enabled categories
///
/// With an empty enabled set the result is empty. Otherwise the allocations
/// sum to `total_budget_cents` exactly. If every effective weight is zero the
/// budget is split evenly and `debug.equal_split_fallback` is set.
pub fn calculate_allocations(input: &AllocationInput) -> AllocationOutput {
    if input.enabled_category_ids.is_empty() {
        return AllocationOutput::default();
    }

    let multipliers = input.tier_multipliers.unwrap_or_default();

    let weights = resolve_weights(
        &input.enabled_category_ids,
        &input.base_weights,
        &input.tier_by_category_id,
        &multipliers,
    );
    let split = allocate_proportionally(&weights, input.total_budget_cents);
    let distribution = distribute_remainders(&split, input.total_budget_cents);

    tracing::debug!(
        total_cents = input.total_budget_cents,
        categories = weights.order.len(),
        sum_effective_weights = weights.sum,
        floor_total = split.floor_total(),
        equal_split = split.equal_split,
        "calculated allocations"
    );

    AllocationOutput {
        allocations_by_category_id: distribution.allocations.into_iter().collect(),
        debug: AllocationDiagnostics {
            sum_effective_weights: weights.sum,
            shares_by_category_id: split
                .entries
                .iter()
                .map(|e| (e.category_id.clone(), e.share))
                .collect(),
            effective_weights_by_category_id: weights.effective,
            rounding_remainders: distribution.rounding_remainders,
            equal_split_fallback: split.equal_split,
        },
    }
}
