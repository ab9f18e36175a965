//! Audit log CLI command

use crate::error::PlannerResult;
use crate::storage::Storage;

/// Print the most recent audit entries
pub fn handle_audit_command(storage: &Storage, count: usize) -> PlannerResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
