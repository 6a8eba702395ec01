//! Tracker configuration with documented defaults
//!
//! Presentation sizes and storage locations live here so the engine
//! itself carries no magic numbers beyond its lookup tables.

use crate::core::error::{Result, TrackerError};
use crate::core::types::StatName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the tracker front end
///
/// Loaded from TOML; any key left out takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    // === STORAGE ===
    /// Where the JSON file store keeps the profile
    pub data_file: PathBuf,

    // === HISTORY ===
    /// chrono format string used to stamp history entries
    ///
    /// The default renders a day-first local date ("18/10/2026"),
    /// which is what exported profiles have always contained.
    pub date_format: String,

    // === PRESENTATION ===
    /// How many stats the status view lists as strengths
    pub strengths_count: usize,

    /// How many stats the status view lists as weaknesses
    pub weaknesses_count: usize,

    /// How many weakest stats the dashboard highlights
    pub dashboard_weakest: usize,

    /// How many recent quests / errors the dashboard lists
    pub recent_history: usize,

    /// XP at or above which values are shown compacted ("123k")
    pub compact_xp_from: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("quest-data.json"),
            date_format: "%d/%m/%Y".to_string(),

            // Status view shows top-2 / bottom-2, dashboard bottom-3
            strengths_count: 2,
            weaknesses_count: 2,
            dashboard_weakest: 3,
            recent_history: 5,

            compact_xp_from: 100_000,
        }
    }
}

impl TrackerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TrackerConfig =
            toml::from_str(content).map_err(|e| TrackerError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(TrackerError::Config("date_format must not be empty".into()));
        }

        let slices = [
            ("strengths_count", self.strengths_count),
            ("weaknesses_count", self.weaknesses_count),
            ("dashboard_weakest", self.dashboard_weakest),
        ];
        for (name, size) in slices {
            if size == 0 || size > StatName::COUNT {
                return Err(TrackerError::Config(format!(
                    "{} ({}) must be between 1 and {}",
                    name,
                    size,
                    StatName::COUNT
                )));
            }
        }

        if self.recent_history == 0 {
            return Err(TrackerError::Config("recent_history must be positive".into()));
        }

        Ok(())
    }
}
