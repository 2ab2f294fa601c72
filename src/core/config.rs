//! Engine tuning loaded from JSON, with the live game's values as defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants::{
    BASE_CAST_DURATION_MS, CAST_DURATION_PER_POWER_MS, LANDED_DISPLAY_MS, MIN_CAST_DURATION_MS,
    STARTING_COINS, TICK_INTERVAL_MS,
};
use crate::fishing::types::{Rarity, RarityPolicy};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Timing, rarity and economy settings for the fishing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tick_ms: u64,
    pub base_duration_ms: u64,
    pub duration_per_power_ms: u64,
    /// Floor for the cast duration, keeps the tick count positive
    pub min_duration_ms: u64,
    pub landed_display_ms: u64,
    pub rarity_policy: RarityPolicy,
    /// Lowest rarity that gets announced in chat
    pub announce_min_rarity: Rarity,
    pub start_coins: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_INTERVAL_MS,
            base_duration_ms: BASE_CAST_DURATION_MS,
            duration_per_power_ms: CAST_DURATION_PER_POWER_MS,
            min_duration_ms: MIN_CAST_DURATION_MS,
            landed_display_ms: LANDED_DISPLAY_MS,
            rarity_policy: RarityPolicy::default(),
            announce_min_rarity: Rarity::Epic,
            start_coins: STARTING_COINS,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a config from JSON text. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be positive".to_string()));
        }
        if self.min_duration_ms < self.tick_ms {
            return Err(ConfigError::Invalid(format!(
                "min_duration_ms ({}) must be at least tick_ms ({})",
                self.min_duration_ms, self.tick_ms
            )));
        }
        Ok(())
    }

    /// Number of ticks needed to cover `duration_ms`, rounded up.
    ///
    /// Saturates at `u32::MAX` for durations too long to count in ticks.
    pub fn ticks_for(&self, duration_ms: u64) -> u32 {
        u32::try_from(duration_ms.div_ceil(self.tick_ms).max(1)).unwrap_or(u32::MAX)
    }
}
