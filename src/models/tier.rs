//! Priority tiers and their multipliers
//!
//! Each enabled category carries one of three tiers. A tier scales the
//! category's base weight by a multiplier from a [`TierMultipliers`] table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority tier assigned to a category, ordered from most to least important
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Top,
    /// Tier used for categories with no explicit assignment
    #[default]
    Important,
    Nice,
}

impl Tier {
    pub fn all() -> &'static [Self] {
        &[Self::Top, Self::Important, Self::Nice]
    }

    /// The wire/storage label (`TOP`, `IMPORTANT`, `NICE`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Important => "IMPORTANT",
            Self::Nice => "NICE",
        }
    }

    /// Friendly name for terminal output
    pub fn description(&self) -> &'static str {
        match self {
            Self::Top => "Top priority",
            Self::Important => "Important",
            Self::Nice => "Nice to have",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOP" | "T" => Ok(Self::Top),
            "IMPORTANT" | "I" => Ok(Self::Important),
            "NICE" | "N" => Ok(Self::Nice),
            _ => Err(TierParseError(s.to_string())),
        }
    }
}

/// Error for an unrecognised tier label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierParseError(pub String);

impl fmt::Display for TierParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown tier '{}' (expected TOP, IMPORTANT or NICE)",
            self.0
        )
    }
}

impl std::error::Error for TierParseError {}

/// Multiplier applied to a category's base weight for each tier
///
/// Replaced as a whole; serde requires all three entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TierMultipliers {
    pub top: f64,
    pub important: f64,
    pub nice: f64,
}

impl TierMultipliers {
    pub const DEFAULT: Self = Self {
        top: 1.4,
        important: 1.0,
        nice: 0.7,
    };

    pub const fn new(top: f64, important: f64, nice: f64) -> Self {
        Self {
            top,
            important,
            nice,
        }
    }

    pub fn multiplier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Top => self.top,
            Tier::Important => self.important,
            Tier::Nice => self.nice,
        }
    }
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self::DEFAULT
    }
}
