//! Largest-remainder distribution
//!
//! Hands the cents lost to flooring back out, one at a time, to the
//! categories with the largest fractional remainders. Ties keep the order
//! in which categories were supplied, which makes the result reproducible.

use serde::{Deserialize, Serialize};

use crate::models::CategoryId;

use super::proportional::ProportionalSplit;

/// A category's fractional cent, as reported in diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundingRemainder {
    pub category_id: CategoryId,
    pub remainder: f64,
}

/// Final allocations in supply order plus the sorted remainder list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Distribution {
    pub allocations: Vec<(CategoryId, u64)>,
    /// Categories with a positive remainder, largest first
    pub rounding_remainders: Vec<RoundingRemainder>,
}

impl Distribution {
    pub fn total(&self) -> u64 {
        self.allocations.iter().map(|(_, cents)| cents).sum()
    }
}

/// Distribute leftover cents so the allocations sum to `total_budget_cents`
pub fn distribute_remainders(split: &ProportionalSplit, total_budget_cents: u64) -> Distribution {
    if split.entries.is_empty() {
        return Distribution::default();
    }

    let mut cents: Vec<u64> = split.entries.iter().map(|e| e.floor_cents).collect();
    let floor_total: u64 = cents.iter().sum();
    let mut remaining = i128::from(total_budget_cents) - i128::from(floor_total);

    // (supply index, remainder); sort_by is stable so equal remainders keep
    // supply order
    let mut ranked: Vec<(usize, f64)> = split
        .entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.remainder > 0.0)
        .map(|(i, e)| (i, e.remainder))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    for &(index, _) in &ranked {
        if remaining <= 0 {
            break;
        }
        cents[index] += 1;
        remaining -= 1;
    }

    if remaining != 0 {
        tracing::warn!(
            residue = remaining as i64,
            categories = split.entries.len(),
            "rounding residue left after remainder walk; settling it directly"
        );
        settle_residue(&mut cents, &ranked, remaining);
    }

    Distribution {
        allocations: split
            .entries
            .iter()
            .zip(cents)
            .map(|(e, c)| (e.category_id.clone(), c))
            .collect(),
        rounding_remainders: ranked
            .iter()
            .map(|&(i, remainder)| RoundingRemainder {
                category_id: split.entries[i].category_id.clone(),
                remainder,
            })
            .collect(),
    }
}

/// Absorb a residue that floating point pushed outside the normal bounds
///
/// Only reachable when the shares don't sum to one closely enough (huge
/// budgets beyond f64's exact integer range). Positive residue goes out in
/// remainder order, then supply order; negative residue is taken back from
/// the smallest remainders first.
fn settle_residue(cents: &mut [u64], ranked: &[(usize, f64)], mut residue: i128) {
    let mut order: Vec<usize> = ranked.iter().map(|&(i, _)| i).collect();
    order.extend((0..cents.len()).filter(|i| !ranked.iter().any(|&(r, _)| r == *i)));

    while residue > 0 {
        for &i in &order {
            if residue == 0 {
                break;
            }
            cents[i] += 1;
            residue -= 1;
        }
    }

    while residue < 0 {
        let before = residue;
        for &i in order.iter().rev() {
            if residue == 0 {
                break;
            }
            if cents[i] > 0 {
                cents[i] -= 1;
                residue += 1;
            }
        }
        if residue == before {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::proportional::FloorAllocation;

    fn split(entries: &[(&str, u64, f64)]) -> ProportionalSplit {
        ProportionalSplit {
            entries: entries
                .iter()
                .map(|(id, floor, remainder)| FloorAllocation {
                    category_id: CategoryId::from(*id),
                    share: 0.0,
                    floor_cents: *floor,
                    remainder: *remainder,
                })
                .collect(),
            equal_split: false,
        }
    }

    fn amounts(distribution: &Distribution) -> Vec<u64> {
        distribution.allocations.iter().map(|(_, c)| *c).collect()
    }

    #[test]
    fn test_largest_remainder_gets_cent() {
        let s = split(&[("a", 10, 0.2), ("b", 10, 0.7), ("c", 9, 0.1)]);
        let d = distribute_remainders(&s, 30);

        assert_eq!(amounts(&d), vec![10, 11, 9]);
        assert_eq!(d.total(), 30);
        let order: Vec<_> = d.rounding_remainders.iter().map(|r| r.category_id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_supply_order() {
        let s = split(&[("x", 33, 0.5), ("y", 33, 0.5), ("z", 33, 0.5)]);
        let d = distribute_remainders(&s, 100);
        assert_eq!(amounts(&d), vec![34, 33, 33]);

        let s = split(&[("z", 33, 0.5), ("y", 33, 0.5), ("x", 33, 0.5)]);
        let d = distribute_remainders(&s, 100);
        assert_eq!(d.allocations[0], (CategoryId::from("z"), 34));
    }

    #[test]
    fn test_zero_remainders_excluded() {
        let s = split(&[("a", 50, 0.0), ("b", 49, 0.5), ("c", 0, 0.5)]);
        let d = distribute_remainders(&s, 100);

        assert_eq!(d.rounding_remainders.len(), 2);
        assert_eq!(amounts(&d), vec![50, 50, 0]);
    }

    #[test]
    fn test_nothing_to_distribute() {
        let s = split(&[("a", 60, 0.0), ("b", 40, 0.0)]);
        let d = distribute_remainders(&s, 100);
        assert_eq!(amounts(&d), vec![60, 40]);
        assert!(d.rounding_remainders.is_empty());
    }

    #[test]
    fn test_positive_residue_settled() {
        // Remainders can't normally sum short of the missing cents
        let s = split(&[("a", 10, 0.9), ("b", 10, 0.0)]);
        let d = distribute_remainders(&s, 23);
        assert_eq!(d.total(), 23);
        assert_eq!(amounts(&d), vec![12, 11]);
    }

    #[test]
    fn test_negative_residue_settled() {
        let s = split(&[("a", 60, 0.1), ("b", 45, 0.4)]);
        let d = distribute_remainders(&s, 100);
        assert_eq!(d.total(), 100);
        assert!(d.allocations.iter().all(|(_, c)| *c <= 60));
    }

    #[test]
    fn test_empty_split() {
        let d = distribute_remainders(&ProportionalSplit::default(), 500);
        assert!(d.allocations.is_empty());
        assert!(d.rounding_remainders.is_empty());
    }
}
