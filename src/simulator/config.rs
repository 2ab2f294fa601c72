//! Simulation configuration.

use crate::core::config::EngineConfig;
use crate::fishing::types::CastPower;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Casts per run
    pub casts_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Cast power used for every cast
    pub power: CastPower,

    /// Location to fish at; the simulated player starts at its unlock level
    pub location_id: String,

    /// Engine tuning under test
    pub engine: EngineConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1,
            casts_per_run: 1000,
            seed: None,
            power: CastPower::new(50),
            location_id: "pond".to_string(),
            engine: EngineConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing rarity rates at a power level
    pub fn power_sweep(power: u32, location_id: &str) -> Self {
        Self {
            casts_per_run: 2000,
            seed: Some(42),
            power: CastPower::new(power),
            location_id: location_id.to_string(),
            verbosity: 0,
            ..Default::default()
        }
    }
}
