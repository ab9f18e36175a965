//! TOP-tier count validation
//!
//! Couples are asked to pick between three and five top priorities. This
//! check is advisory: it reports whether the count is in range and a message
//! for the user, and leaves it to the caller whether to allocate anyway.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::models::{CategoryId, Tier};

/// Fewest TOP categories allowed (inclusive)
pub const MIN_TOP_PRIORITIES: usize = 3;

/// Most TOP categories allowed (inclusive)
pub const MAX_TOP_PRIORITIES: usize = 5;

/// Where the TOP count falls relative to the allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityStatus {
    BelowMinimum,
    Valid,
    AboveMaximum,
}

/// Outcome of [`validate_priority_count`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityValidation {
    pub is_valid: bool,
    pub top_count: usize,
    pub message: String,
    pub status: PriorityStatus,
}

impl fmt::Display for PriorityValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Count the enabled categories marked TOP and check the count is in range
///
/// Categories without a tier entry are not TOP. Tier entries for categories
/// outside the enabled set are ignored, and duplicate enabled IDs count once.
pub fn validate_priority_count(
    tier_by_category_id: &BTreeMap<CategoryId, Tier>,
    enabled_category_ids: &[CategoryId],
) -> PriorityValidation {
    let top_count = enabled_category_ids
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter(|id| tier_by_category_id.get(*id) == Some(&Tier::Top))
        .count();

    if top_count < MIN_TOP_PRIORITIES {
        return PriorityValidation {
            is_valid: false,
            top_count,
            message: format!(
                "Please select at least {} top priorities (currently {})",
                MIN_TOP_PRIORITIES, top_count
            ),
            status: PriorityStatus::BelowMinimum,
        };
    }

    if top_count > MAX_TOP_PRIORITIES {
        return PriorityValidation {
            is_valid: false,
            top_count,
            message: format!(
                "Please select at most {} top priorities (currently {})",
                MAX_TOP_PRIORITIES, top_count
            ),
            status: PriorityStatus::AboveMaximum,
        };
    }

    PriorityValidation {
        is_valid: true,
        top_count,
        message: "Priority count is valid".to_string(),
        status: PriorityStatus::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `tops` of the `total` enabled categories are TOP, the rest IMPORTANT
    fn setup(tops: usize, total: usize) -> (BTreeMap<CategoryId, Tier>, Vec<CategoryId>) {
        let enabled: Vec<CategoryId> = (1..=total)
            .map(|i| CategoryId::new(format!("cat{}", i)))
            .collect();
        let tiers = enabled
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let tier = if i < tops { Tier::Top } else { Tier::Important };
                (id.clone(), tier)
            })
            .collect();
        (tiers, enabled)
    }

    #[test]
    fn test_two_tops_below_minimum() {
        let (tiers, enabled) = setup(2, 8);
        let result = validate_priority_count(&tiers, &enabled);

        assert!(!result.is_valid);
        assert_eq!(result.top_count, 2);
        assert_eq!(result.status, PriorityStatus::BelowMinimum);
        assert_eq!(
            result.message,
            "Please select at least 3 top priorities (currently 2)"
        );
    }

    #[test]
    fn test_three_tops_valid() {
        let (tiers, enabled) = setup(3, 8);
        let result = validate_priority_count(&tiers, &enabled);

        assert!(result.is_valid);
        assert_eq!(result.top_count, 3);
        assert_eq!(result.message, "Priority count is valid");
    }

    #[test]
    fn test_five_tops_valid() {
        let (tiers, enabled) = setup(5, 8);
        let result = validate_priority_count(&tiers, &enabled);

        assert!(result.is_valid);
        assert_eq!(result.status, PriorityStatus::Valid);
    }

    #[test]
    fn test_six_tops_above_maximum() {
        let (tiers, enabled) = setup(6, 8);
        let result = validate_priority_count(&tiers, &enabled);

        assert!(!result.is_valid);
        assert_eq!(result.top_count, 6);
        assert_eq!(result.status, PriorityStatus::AboveMaximum);
        assert_eq!(
            result.message,
            "Please select at most 5 top priorities (currently 6)"
        );
    }

    #[test]
    fn test_disabled_tops_not_counted() {
        let (tiers, enabled) = setup(4, 8);
        // Drop two of the TOP categories from the enabled set
        let result = validate_priority_count(&tiers, &enabled[2..]);
        assert_eq!(result.top_count, 2);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let (tiers, mut enabled) = setup(3, 3);
        enabled.push(enabled[0].clone());
        let result = validate_priority_count(&tiers, &enabled);
        assert_eq!(result.top_count, 3);
    }

    #[test]
    fn test_empty_input() {
        let result = validate_priority_count(&BTreeMap::new(), &[]);
        assert_eq!(result.top_count, 0);
        assert_eq!(result.status, PriorityStatus::BelowMinimum);
    }
}
