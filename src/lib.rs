//! wedplan - Terminal-based wedding budget planner
//!
//! This library provides the core functionality for the `wedplan` command:
//! a catalog of wedding budget categories, a plan that enables and ranks
//! them, and an allocation engine that splits the total budget across the
//! enabled categories in whole cents.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `allocation`: The pure allocation engine and priority validator
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (catalog, tiers, money, plan)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export of allocations
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use wedding_budget::config::{paths::PlannerPaths, settings::Settings};
//!
//! let paths = PlannerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod allocation;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
