//! Allocation display formatting
//!
//! Renders allocation results, per-group totals and engine diagnostics as
//! tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::allocation::AllocationDiagnostics;
use crate::models::{
    category_group, category_name, AllocatedCategory, CategoryGroup, CategoryId, Money,
};

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tier")]
    tier: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Categories")]
    categories: usize,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct DiagnosticRow {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Effective Weight")]
    effective_weight: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Remainder")]
    remainder: String,
}

fn percent(part: Money, total: Money) -> String {
    if total.is_zero() {
        return "-".to_string();
    }
    format!("{:.1}%", part.cents() as f64 * 100.0 / total.cents() as f64)
}

/// Format allocated amounts per category, with a total row
pub fn format_allocation_table(
    entries: &[AllocatedCategory],
    total_budget: Money,
    currency_symbol: &str,
) -> String {
    if entries.is_empty() {
        return "No allocations.".to_string();
    }

    let mut rows: Vec<AllocationRow> = entries
        .iter()
        .map(|entry| AllocationRow {
            name: category_name(&entry.category_id),
            id: entry.category_id.to_string(),
            tier: entry.tier.to_string(),
            amount: entry.amount.format_with_symbol(currency_symbol),
            share: percent(entry.amount, total_budget),
        })
        .collect();

    let allocated: Money = entries.iter().map(|e| e.amount).sum();
    rows.push(AllocationRow {
        name: "Total".to_string(),
        id: String::new(),
        tier: String::new(),
        amount: allocated.format_with_symbol(currency_symbol),
        share: percent(allocated, total_budget),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(3..), Alignment::right());
    table.to_string()
}

/// Allocated amount summed over one category group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    /// `None` collects custom categories
    pub group: Option<CategoryGroup>,
    pub categories: usize,
    pub amount: Money,
}

impl GroupTotal {
    pub fn label(&self) -> &'static str {
        self.group.map(|g| g.name()).unwrap_or("Custom")
    }
}

/// Sum allocations per catalog group, in group display order
///
/// Custom categories come last. Groups with no enabled category are left
/// out.
pub fn group_totals(entries: &[AllocatedCategory]) -> Vec<GroupTotal> {
    let mut totals: Vec<GroupTotal> = CategoryGroup::all()
        .iter()
        .map(|g| Some(*g))
        .chain(std::iter::once(None))
        .map(|group| GroupTotal {
            group,
            categories: 0,
            amount: Money::zero(),
        })
        .collect();

    for entry in entries {
        let group = category_group(&entry.category_id);
        if let Some(total) = totals.iter_mut().find(|t| t.group == group) {
            total.categories += 1;
            total.amount += entry.amount;
        }
    }

    totals.retain(|t| t.categories > 0);
    totals
}

/// Format allocated amounts per category group, with a total row
pub fn format_group_summary(
    entries: &[AllocatedCategory],
    total_budget: Money,
    currency_symbol: &str,
) -> String {
    let totals = group_totals(entries);
    if totals.is_empty() {
        return "No allocations.".to_string();
    }

    let mut rows: Vec<GroupRow> = totals
        .iter()
        .map(|t| GroupRow {
            group: t.label().to_string(),
            categories: t.categories,
            amount: t.amount.format_with_symbol(currency_symbol),
            share: percent(t.amount, total_budget),
        })
        .collect();

    let allocated: Money = totals.iter().map(|t| t.amount).sum();
    rows.push(GroupRow {
        group: "Total".to_string(),
        categories: totals.iter().map(|t| t.categories).sum(),
        amount: allocated.format_with_symbol(currency_symbol),
        share: percent(allocated, total_budget),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format the engine's intermediate values
///
/// Categories with a fractional remainder come first, ranked in the order
/// the remainder walk hands out cents; the rest follow by ID.
pub fn format_diagnostics(debug: &AllocationDiagnostics) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Sum of effective weights: {:.4}\n",
        debug.sum_effective_weights
    ));
    if debug.equal_split_fallback {
        output.push_str("All weights were zero; budget split evenly\n");
    }

    let row = |rank: String, id: &CategoryId, remainder: String| DiagnosticRow {
        rank,
        id: id.to_string(),
        effective_weight: debug
            .effective_weights_by_category_id
            .get(id)
            .map(|w| format!("{:.4}", w))
            .unwrap_or_default(),
        share: debug
            .shares_by_category_id
            .get(id)
            .map(|s| format!("{:.4}", s))
            .unwrap_or_default(),
        remainder,
    };

    let mut rows: Vec<DiagnosticRow> = debug
        .rounding_remainders
        .iter()
        .enumerate()
        .map(|(i, r)| {
            row(
                (i + 1).to_string(),
                &r.category_id,
                format!("{:.4}", r.remainder),
            )
        })
        .collect();

    rows.extend(
        debug
            .effective_weights_by_category_id
            .keys()
            .filter(|id| !debug.rounding_remainders.iter().any(|r| &r.category_id == *id))
            .map(|id| row("-".to_string(), id, "-".to_string())),
    );

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(2..), Alignment::right());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{calculate_allocations, AllocationInput};
    use crate::models::Tier;

    fn entry(id: &str, cents: u64) -> AllocatedCategory {
        AllocatedCategory {
            category_id: CategoryId::from(id),
            tier: Tier::Important,
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_allocation_table() {
        let entries = vec![
            AllocatedCategory {
                category_id: CategoryId::from("cat_001"),
                tier: Tier::Top,
                amount: Money::from_cents(1_500_000),
            },
            AllocatedCategory {
                category_id: CategoryId::from("photo_booth"),
                tier: Tier::Important,
                amount: Money::from_cents(1_500_000),
            },
        ];

        let output = format_allocation_table(&entries, Money::from_cents(3_000_000), "$");
        assert!(output.contains("Venue & Rentals"));
        assert!(output.contains("photo_booth"));
        assert!(output.contains("$15,000.00"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("$30,000.00"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_empty_allocation_table() {
        assert_eq!(
            format_allocation_table(&[], Money::zero(), "$"),
            "No allocations."
        );
    }

    #[test]
    fn test_zero_budget_share() {
        let entries = vec![AllocatedCategory {
            category_id: CategoryId::from("cat_001"),
            tier: Tier::Important,
            amount: Money::zero(),
        }];
        let output = format_allocation_table(&entries, Money::zero(), "$");
        assert!(output.contains("$0.00"));
        assert!(!output.contains('%'));
    }

    #[test]
    fn test_group_totals_sum_to_budget() {
        let input = AllocationInput::new(3_000_017)
            .with_category("cat_001", Some(0.20), Some(Tier::Top))
            .with_category("cat_004", Some(0.12), None)
            .with_category("cat_013", Some(0.06), Some(Tier::Nice))
            .with_category("cat_020", Some(0.03), None)
            .with_category("cat_026", Some(0.10), None)
            .with_category("photo_booth", None, Some(Tier::Top));
        let output = calculate_allocations(&input);
        let entries: Vec<AllocatedCategory> = output
            .allocations_by_category_id
            .iter()
            .map(|(id, cents)| entry(id.as_str(), *cents))
            .collect();

        let totals = group_totals(&entries);
        let labels: Vec<&str> = totals.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Core", "Admin", "Enhancements", "Safety Net", "Custom"]
        );
        assert_eq!(totals[0].categories, 2);
        assert_eq!(
            totals[0].amount.cents(),
            output.allocation_for("cat_001").unwrap() + output.allocation_for("cat_004").unwrap()
        );

        let sum: Money = totals.iter().map(|t| t.amount).sum();
        assert_eq!(sum.cents(), 3_000_017);
    }

    #[test]
    fn test_group_summary_table() {
        let entries = vec![
            entry("cat_001", 1_500_000),
            entry("cat_002", 500_000),
            entry("cat_027", 1_000_000),
        ];
        let output = format_group_summary(&entries, Money::from_cents(3_000_000), "$");

        let core = output.lines().find(|l| l.contains("Core")).unwrap();
        assert!(core.contains("$20,000.00"));
        assert!(core.contains("66.7%"));
        let flex = output.lines().find(|l| l.contains("Flex")).unwrap();
        assert!(flex.contains("33.3%"));
        assert!(!output.contains("Admin"));
        assert!(!output.contains("Custom"));

        let total = output.lines().find(|l| l.contains("Total")).unwrap();
        assert!(total.contains("$30,000.00"));
        assert!(total.contains("100.0%"));

        assert_eq!(
            format_group_summary(&[], Money::zero(), "$"),
            "No allocations."
        );
    }

    #[test]
    fn test_diagnostics() {
        let input = AllocationInput::new(3_000_000)
            .with_category("cat1", Some(0.25), Some(Tier::Top))
            .with_category("cat2", Some(0.20), Some(Tier::Important))
            .with_category("cat3", Some(0.15), Some(Tier::Nice));
        let output = format_diagnostics(&calculate_allocations(&input).debug);

        assert!(output.starts_with("Sum of effective weights: 0.6550\n"));
        assert!(output.contains("0.3500"));
        assert!(!output.contains("split evenly"));

        // Remainders .53 (cat2), .44 (cat1), .03 (cat3)
        let rank_one = output.lines().find(|l| l.contains("cat2")).unwrap();
        assert!(rank_one.trim_start().starts_with("1 "));
        let position = |id: &str| output.lines().position(|l| l.contains(id)).unwrap();
        assert!(position("cat2") < position("cat1"));
        assert!(position("cat1") < position("cat3"));
    }

    #[test]
    fn test_diagnostics_unranked_rows_last() {
        let input = AllocationInput::new(101)
            .with_category("venue", Some(0.5), None)
            .with_category("zero_weight", Some(0.0), None)
            .with_category("florals", Some(0.5), None);
        let output = format_diagnostics(&calculate_allocations(&input).debug);

        let lines: Vec<&str> = output.lines().collect();
        let position = |id: &str| lines.iter().position(|l| l.contains(id)).unwrap();
        // Equal remainders keep supply order; no remainder sorts after
        assert!(position("venue") < position("florals"));
        assert!(position("florals") < position("zero_weight"));

        let unranked = lines[position("zero_weight")];
        assert!(unranked.trim_start().starts_with("- "));
        assert!(unranked.trim_end().ends_with('-'));
    }
}
