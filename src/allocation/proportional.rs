//! Proportional floor allocation
//!
//! Converts effective weights into each category's share of the budget and
//! floors the resulting cent amount. The floors never exceed the true
//! proportional amount; the cents lost here are handed back by the
//! remainder distributor.

use crate::models::CategoryId;

use super::weights::ResolvedWeights;

/// One category's floored share of the budget
#[derive(Debug, Clone, PartialEq)]
pub struct FloorAllocation {
    pub category_id: CategoryId,
    /// Fraction of the budget in [0, 1]
    pub share: f64,
    pub floor_cents: u64,
    /// Fractional cent lost to flooring, in [0, 1)
    pub remainder: f64,
}

/// Floored allocations in supply order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProportionalSplit {
    pub entries: Vec<FloorAllocation>,
    /// Set when the total weight was zero and every category got 1/n
    pub equal_split: bool,
}

impl ProportionalSplit {
    pub fn floor_total(&self) -> u64 {
        self.entries.iter().map(|e| e.floor_cents).sum()
    }
}

/// Split `total_budget_cents` across the resolved categories
///
/// When the weights sum to zero there is no meaningful proportion, so each
/// category receives an equal share instead.
pub fn allocate_proportionally(
    weights: &ResolvedWeights,
    total_budget_cents: u64,
) -> ProportionalSplit {
    if weights.is_empty() {
        return ProportionalSplit::default();
    }

    let equal_split = !(weights.sum.is_finite() && weights.sum > 0.0);
    let count = weights.order.len() as f64;
    let total = total_budget_cents as f64;

    let entries = weights
        .order
        .iter()
        .map(|id| {
            let share = if equal_split {
                1.0 / count
            } else {
                weights.weight_of(id) / weights.sum
            };

            let raw = share * total;
            let floored = raw.floor();
            let remainder = raw - floored;

            FloorAllocation {
                category_id: id.clone(),
                share,
                // float-to-int casts saturate, so this never exceeds u64
                floor_cents: (floored as u64).min(total_budget_cents),
                remainder,
            }
        })
        .collect();

    ProportionalSplit {
        entries,
        equal_split,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(&str, f64)]) -> ResolvedWeights {
        let mut resolved = ResolvedWeights::default();
        for (id, w) in pairs {
            resolved.order.push(CategoryId::from(*id));
            resolved.effective.insert(CategoryId::from(*id), *w);
            resolved.sum += *w;
        }
        resolved
    }

    #[test]
    fn test_floors_and_remainders() {
        let split = allocate_proportionally(&weights(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]), 100);

        assert!(!split.equal_split);
        for entry in &split.entries {
            assert_eq!(entry.floor_cents, 33);
            assert!((entry.remainder - 1.0 / 3.0).abs() < 1e-9);
            assert!((entry.share - 1.0 / 3.0).abs() < 1e-12);
        }
        assert_eq!(split.floor_total(), 99);
    }

    #[test]
    fn test_floor_total_short_by_less_than_count() {
        let split = allocate_proportionally(
            &weights(&[("a", 0.37), ("b", 0.11), ("c", 0.29), ("d", 0.23)]),
            1_234_567,
        );
        let shortfall = 1_234_567 - split.floor_total();
        assert!(shortfall < split.entries.len() as u64);

        for entry in &split.entries {
            assert!(entry.remainder >= 0.0 && entry.remainder < 1.0);
        }
    }

    #[test]
    fn test_exact_division_has_no_remainder() {
        let split = allocate_proportionally(&weights(&[("a", 0.3), ("b", 0.3)]), 5_000_000);
        assert_eq!(split.entries[0].floor_cents, 2_500_000);
        assert_eq!(split.entries[1].floor_cents, 2_500_000);
        assert_eq!(split.entries[0].remainder, 0.0);
    }

    #[test]
    fn test_zero_weights_fall_back_to_equal_split() {
        let split = allocate_proportionally(&weights(&[("a", 0.0), ("b", 0.0)]), 101);
        assert!(split.equal_split);
        assert_eq!(split.entries[0].share, 0.5);
        assert_eq!(split.entries[0].floor_cents, 50);
        assert_eq!(split.entries[1].floor_cents, 50);
    }

    #[test]
    fn test_zero_weight_category_gets_nothing() {
        let split = allocate_proportionally(&weights(&[("a", 0.0), ("b", 0.4)]), 1000);
        assert_eq!(split.entries[0].floor_cents, 0);
        assert_eq!(split.entries[0].remainder, 0.0);
        assert_eq!(split.entries[1].floor_cents, 1000);
    }

    #[test]
    fn test_empty_weights() {
        let split = allocate_proportionally(&ResolvedWeights::default(), 1000);
        assert!(split.entries.is_empty());
        assert!(!split.equal_split);
    }
}
