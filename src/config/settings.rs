//! User settings for the planner
//!
//! Holds the tier multiplier override, priority enforcement and display
//! preferences. Every field has a serde default so older config files keep
//! loading after new settings are added.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::export::ExportFormat;
use crate::models::TierMultipliers;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Replacement for the whole tier multiplier table
    ///
    /// Individual entries cannot be overridden; either the full table is
    /// supplied or the built-in defaults apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_multipliers: Option<TierMultipliers>,

    /// Refuse to allocate while the TOP-tier count is outside 3..=5
    #[serde(default = "default_enforce_priority_count")]
    pub enforce_priority_count: bool,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_enforce_priority_count() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tier_multipliers: None,
            enforce_priority_count: default_enforce_priority_count(),
            currency_symbol: default_currency(),
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// The multiplier table allocations should use
    pub fn effective_multipliers(&self) -> TierMultipliers {
        self.tier_multipliers.unwrap_or_default()
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved until the caller decides to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.tier_multipliers.is_none());
        assert!(settings.enforce_priority_count);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.effective_multipliers(), TierMultipliers::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.enforce_priority_count = false;
        settings.tier_multipliers = Some(TierMultipliers::new(2.0, 1.0, 0.5));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.enforce_priority_count);
        assert_eq!(loaded.effective_multipliers().top, 2.0);
        assert_eq!(loaded.effective_multipliers().nice, 0.5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert!(loaded.enforce_priority_count);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_multiplier_table_rejected() {
        let result: Result<Settings, _> =
            serde_json::from_str(r#"{"tier_multipliers": {"TOP": 2.0}}"#);
        assert!(result.is_err());
    }
}
