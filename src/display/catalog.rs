//! Catalog display formatting
//!
//! Formats the master category catalog as a tree grouped by category group.

use crate::models::{categories_in_group, CategoryGroup, WeddingPlan};

/// Format the catalog tree, marking what the plan has enabled if one exists
pub fn format_catalog(plan: Option<&WeddingPlan>) -> String {
    let mut output = String::new();
    let groups = CategoryGroup::all();

    for (i, group) in groups.iter().enumerate() {
        output.push_str(&format!("{}\n", group.name()));

        let categories: Vec<_> = categories_in_group(*group).collect();
        for (j, master) in categories.iter().enumerate() {
            let prefix = if j == categories.len() - 1 {
                "└── "
            } else {
                "├── "
            };

            let status = match plan {
                Some(plan) => {
                    let id = master.category_id();
                    if plan.is_enabled(&id) {
                        format!("  [{}]", plan.tier_of(&id))
                    } else {
                        "  (disabled)".to_string()
                    }
                }
                None => String::new(),
            };

            output.push_str(&format!(
                "  {}{}  {:<32} {:.2}{}\n",
                prefix, master.id, master.name, master.base_weight, status
            ));
        }

        if i < groups.len() - 1 {
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, Tier};

    #[test]
    fn test_catalog_without_plan() {
        let output = format_catalog(None);
        assert!(output.starts_with("Core\n"));
        assert!(output.contains("cat_001  Venue & Rentals"));
        assert!(output.contains("0.20"));
        assert!(output.contains("└── cat_027"));
        assert!(!output.contains("[IMPORTANT]"));
    }

    #[test]
    fn test_catalog_marks_plan_state() {
        let mut plan = WeddingPlan::new("Test", Money::zero());
        plan.set_tier(CategoryId::from("cat_004"), Tier::Top);
        plan.disable(&CategoryId::from("cat_023"));

        let output = format_catalog(Some(&plan));
        let photo = output.lines().find(|l| l.contains("cat_004")).unwrap();
        assert!(photo.ends_with("[TOP]"));
        let favors = output.lines().find(|l| l.contains("cat_023")).unwrap();
        assert!(favors.ends_with("(disabled)"));
    }
}
