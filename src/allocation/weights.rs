//! Effective weight resolution
//!
//! Turns each enabled category's base weight and tier into an effective
//! weight. Missing base weights and tiers fall back to defaults.

use std::collections::BTreeMap;

use crate::models::{CategoryId, Tier, TierMultipliers};

use super::DEFAULT_BASE_WEIGHT;

/// Effective weights for the enabled categories
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedWeights {
    /// Enabled categories in supply order, duplicates removed
    pub order: Vec<CategoryId>,
    pub effective: BTreeMap<CategoryId, f64>,
    pub sum: f64,
}

impl ResolvedWeights {
    pub fn weight_of(&self, id: &CategoryId) -> f64 {
        self.effective.get(id).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Resolve the effective weight of every enabled category
///
/// A duplicate ID keeps its first position and is counted once. Products
/// that come out negative or non-finite (from a bad multiplier table) are
/// treated as zero weight.
pub fn resolve_weights(
    enabled_category_ids: &[CategoryId],
    base_weights: &BTreeMap<CategoryId, f64>,
    tier_by_category_id: &BTreeMap<CategoryId, Tier>,
    multipliers: &TierMultipliers,
) -> ResolvedWeights {
    let mut resolved = ResolvedWeights::default();

    for id in enabled_category_ids {
        if resolved.effective.contains_key(id) {
            continue;
        }

        let base_weight = base_weights.get(id).copied().unwrap_or(DEFAULT_BASE_WEIGHT);
        let tier = tier_by_category_id.get(id).copied().unwrap_or_default();
        let product = base_weight * multipliers.multiplier(tier);
        let effective = if product.is_finite() && product > 0.0 {
            product
        } else {
            0.0
        };

        resolved.order.push(id.clone());
        resolved.effective.insert(id.clone(), effective);
        resolved.sum += effective;
    }

    resolved
}
