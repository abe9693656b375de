//! Arena configuration
//!
//! Defaults reproduce the classic run: 30 NPCs, fighting at ranges
//! 20, 35, 50, 65, 80 and 95. Every field may be overridden from a TOML file;
//! missing fields fall back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{ArenaError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    // === POPULATION ===
    /// Number of NPCs the generator spawns
    pub population_size: usize,

    /// Generator seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    // === RANGE SCHEDULE ===
    /// Proximity threshold of the first round
    pub range_start: u32,

    /// Last range that may still be fought (inclusive)
    pub range_end: u32,

    /// Amount the threshold grows between rounds
    pub range_step: u32,

    // === FILES ===
    /// Where the generated population is saved before the fight
    pub save_path: PathBuf,

    /// Where the file sink appends one line per fight
    pub fight_log_path: PathBuf,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            seed: None,

            range_start: 20,
            range_end: 100,
            range_step: 15,

            save_path: PathBuf::from("save.txt"),
            fight_log_path: PathBuf::from("fighting_log.txt"),
        }
    }
}

impl ArenaConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(ArenaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }

        if self.range_step == 0 {
            return Err(ArenaError::InvalidConfig("range_step must be positive".into()));
        }

        if self.range_start > self.range_end {
            return Err(ArenaError::InvalidConfig(format!(
                "range_start ({}) must not exceed range_end ({})",
                self.range_start, self.range_end
            )));
        }

        Ok(())
    }

    /// The proximity thresholds visited by a campaign, in order
    pub fn ranges(&self) -> impl Iterator<Item = u32> {
        // step_by(0) panics
        (self.range_start..=self.range_end).step_by(self.range_step.max(1) as usize)
    }
}
