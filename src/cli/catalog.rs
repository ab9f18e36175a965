//! Catalog CLI command

use crate::display::format_catalog;
use crate::error::PlannerResult;
use crate::storage::Storage;

/// Print the built-in category catalog, with plan state if a plan exists
pub fn handle_catalog_command(storage: &Storage) -> PlannerResult<()> {
    let plan = storage.plan.get()?;
    print!("{}", format_catalog(plan.as_ref()));
    Ok(())
}
