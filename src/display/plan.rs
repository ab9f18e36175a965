//! Plan display formatting

use crate::allocation::PriorityValidation;
use crate::models::{catalog_base_weight, category_name, Tier, WeddingPlan};

use super::allocation::format_group_summary;

/// Format the plan header and its enabled categories
///
/// When an allocation has been generated, its per-group totals follow the
/// category list.
pub fn format_plan_summary(
    plan: &WeddingPlan,
    priority: &PriorityValidation,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Plan: {}\n", plan.name));
    output.push_str(&format!("  ID:         {}\n", plan.id));
    output.push_str(&format!(
        "  Budget:     {}\n",
        plan.total_budget.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Categories: {} enabled\n",
        plan.enabled_categories.len()
    ));
    output.push_str(&format!("  Priorities: {}\n", format_priority(priority)));
    let tiers: Vec<String> = Tier::all()
        .iter()
        .map(|tier| format!("{} {}", plan.tier_count(*tier), tier.description()))
        .collect();
    output.push_str(&format!("  Tiers:      {}\n", tiers.join(", ")));

    let allocation_status = match &plan.allocation {
        None => "not generated".to_string(),
        Some(snapshot) if plan.allocation_is_stale() => format!(
            "out of date (generated {}; run 'wedplan allocate')",
            snapshot.generated_at.format("%Y-%m-%d %H:%M")
        ),
        Some(snapshot) => format!(
            "generated {}",
            snapshot.generated_at.format("%Y-%m-%d %H:%M")
        ),
    };
    output.push_str(&format!("  Allocation: {}\n", allocation_status));

    if plan.enabled_categories.is_empty() {
        output.push_str("\nNo categories enabled.\n");
        return output;
    }

    let names: Vec<String> = plan.enabled_categories.iter().map(category_name).collect();
    let name_width = names.iter().map(|n| n.len()).max().unwrap_or(8).max(8);

    output.push('\n');
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {:<9}  {:>6}\n",
        "Category",
        "ID",
        "Tier",
        "Weight",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<10}  {:-<9}  {:->6}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (id, name) in plan.enabled_categories.iter().zip(&names) {
        let weight = catalog_base_weight(id)
            .map(|w| format!("{:.2}", w))
            .unwrap_or_else(|| "custom".to_string());

        let amount = plan
            .allocation
            .as_ref()
            .and_then(|s| s.amount_for(id))
            .map(|m| format!("  {}", m.format_with_symbol(currency_symbol)))
            .unwrap_or_default();

        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {:<9}  {:>6}{}\n",
            name,
            id.as_str(),
            plan.tier_of(id).label(),
            weight,
            amount,
            name_width = name_width,
        ));
    }

    if let Some(snapshot) = &plan.allocation {
        output.push_str("\nBy group:\n");
        output.push_str(&format_group_summary(
            &snapshot.entries,
            snapshot.total_budget,
            currency_symbol,
        ));
        output.push('\n');
    }

    output
}

/// One-line priority status
pub fn format_priority(priority: &PriorityValidation) -> String {
    if priority.is_valid {
        format!("{} TOP (ok)", priority.top_count)
    } else {
        format!("{} TOP - {}", priority.top_count, priority.message)
    }
}
