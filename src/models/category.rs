//! Built-in wedding category catalog
//!
//! The catalog is fixed: 27 categories organized into five groups, each with
//! a base weight giving its nominal share of a typical wedding budget. Plans
//! reference categories by ID; IDs not in the catalog are custom categories
//! and fall back to the default base weight during allocation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use self::CategoryGroup::{Admin, Core, Enhancements, Flex, SafetyNet};

/// Group a catalog category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryGroup {
    Core,
    Admin,
    Enhancements,
    SafetyNet,
    Flex,
}

impl CategoryGroup {
    /// Get all groups in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Core,
            Self::Admin,
            Self::Enhancements,
            Self::SafetyNet,
            Self::Flex,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Admin => "Admin",
            Self::Enhancements => "Enhancements",
            Self::SafetyNet => "Safety Net",
            Self::Flex => "Flex",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A category from the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub group: CategoryGroup,
    pub base_weight: f64,
}

impl MasterCategory {
    pub fn category_id(&self) -> CategoryId {
        CategoryId::from(self.id)
    }
}

impl fmt::Display for MasterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn cat(
    id: &'static str,
    name: &'static str,
    group: CategoryGroup,
    base_weight: f64,
) -> MasterCategory {
    MasterCategory {
        id,
        name,
        group,
        base_weight,
    }
}

static CATALOG: [MasterCategory; 27] = [
    cat("cat_001", "Venue & Rentals", Core, 0.20),
    cat("cat_002", "Catering / Food", Core, 0.18),
    cat("cat_003", "Bar / Alcohol", Core, 0.08),
    cat("cat_004", "Photography", Core, 0.12),
    cat("cat_005", "Videography", Core, 0.08),
    cat("cat_006", "Planner / Coordination", Core, 0.06),
    cat("cat_007", "Attire", Core, 0.08),
    cat("cat_008", "Florals", Core, 0.07),
    cat("cat_009", "Music / Entertainment", Core, 0.07),
    cat("cat_010", "Officiant", Core, 0.01),
    cat("cat_011", "Cake / Desserts", Core, 0.03),
    cat("cat_012", "Hair & Makeup", Core, 0.02),
    cat("cat_013", "Taxes, Service Fees & Delivery", Admin, 0.06),
    cat("cat_014", "Tips / Gratuities", Admin, 0.05),
    cat("cat_015", "Permits & Licenses", Admin, 0.01),
    cat("cat_016", "Postage & Mailing", Admin, 0.01),
    cat("cat_017", "Insurance", Admin, 0.02),
    cat("cat_018", "Decor Enhancements (Non-floral)", Enhancements, 0.04),
    cat("cat_019", "Signage & Stationery", Enhancements, 0.01),
    cat("cat_020", "Lighting & Draping", Enhancements, 0.03),
    cat("cat_021", "Transportation", Enhancements, 0.03),
    cat("cat_022", "Guest Experience", Enhancements, 0.02),
    cat("cat_023", "Favors", Enhancements, 0.01),
    cat("cat_024", "Late-Night Snack", Enhancements, 0.01),
    cat("cat_025", "Bridal Party Gifts", Enhancements, 0.02),
    cat("cat_026", "Contingency / Flex Fund", SafetyNet, 0.10),
    cat("cat_027", "Miscellaneous / Other", Flex, 0.03),
];

/// All catalog categories in catalog order
pub fn catalog() -> &'static [MasterCategory] {
    &CATALOG
}

/// Look up a catalog category by ID, or by name (case-insensitive)
pub fn find_master_category(key: &str) -> Option<&'static MasterCategory> {
    let key = key.trim();
    CATALOG
        .iter()
        .find(|c| c.id == key)
        .or_else(|| CATALOG.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
}

/// Name to show for a category: the catalog name, or the ID for custom ones
pub fn category_name(id: &CategoryId) -> String {
    by_id(id)
        .map(|c| c.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Base weight from the catalog; `None` for custom categories
pub fn catalog_base_weight(id: &CategoryId) -> Option<f64> {
    by_id(id).map(|c| c.base_weight)
}

/// Group of a catalog category; `None` for custom categories
pub fn category_group(id: &CategoryId) -> Option<CategoryGroup> {
    by_id(id).map(|c| c.group)
}

fn by_id(id: &CategoryId) -> Option<&'static MasterCategory> {
    CATALOG.iter().find(|c| c.id == id.as_str())
}

/// Catalog categories in one group
pub fn categories_in_group(group: CategoryGroup) -> impl Iterator<Item = &'static MasterCategory> {
    CATALOG.iter().filter(move |c| c.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_groups() {
        assert_eq!(catalog().len(), 27);
        assert_eq!(categories_in_group(Core).count(), 12);
        assert_eq!(categories_in_group(Admin).count(), 5);
        assert_eq!(categories_in_group(Enhancements).count(), 8);
        assert_eq!(categories_in_group(SafetyNet).count(), 1);
        assert_eq!(categories_in_group(Flex).count(), 1);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = catalog().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_base_weights_in_range() {
        for category in catalog() {
            assert!(
                category.base_weight > 0.0 && category.base_weight <= 1.0,
                "{} has weight {}",
                category.id,
                category.base_weight
            );
        }
    }

    #[test]
    fn test_find_by_id_and_name() {
        assert_eq!(find_master_category("cat_004").unwrap().name, "Photography");
        assert_eq!(find_master_category("photography").unwrap().id, "cat_004");
        assert!(find_master_category("cat_999").is_none());
    }

    #[test]
    fn test_names_and_weights_for_custom_ids() {
        assert_eq!(category_name(&CategoryId::from("cat_026")), "Contingency / Flex Fund");
        assert_eq!(category_name(&CategoryId::from("photo_booth")), "photo_booth");
        assert_eq!(catalog_base_weight(&CategoryId::from("cat_001")), Some(0.20));
        assert_eq!(catalog_base_weight(&CategoryId::from("photo_booth")), None);
        assert_eq!(category_group(&CategoryId::from("cat_026")), Some(SafetyNet));
        assert_eq!(category_group(&CategoryId::from("photo_booth")), None);
    }

    #[test]
    fn test_group_serialization() {
        assert_eq!(
            serde_json::to_string(&SafetyNet).unwrap(),
            "\"SAFETY_NET\""
        );
    }
}
