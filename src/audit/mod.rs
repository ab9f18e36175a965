//! Audit logging for plan changes and allocation runs
//!
//! Every change to the plan (budget, category selection, tiers) and every
//! allocation run is appended to a line-delimited JSON audit log.
//!
//! - `AuditEntry`: timestamp, operation, entity and optional before/after
//!   values.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use wedding_budget::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::update(
//!     EntityType::Plan,
//!     plan.id.to_string(),
//!     Some(plan.name.clone()),
//!     &before,
//!     &plan,
//!     Some("budget: $25,000.00 -> $30,000.00".into()),
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
