//! Simulation runner driving the real session and tick loop.
//!
//! Statistics are tracked externally from [`TickEvent`]s, so the simulator
//! measures exactly what a player would see.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::game_state::{GameState, SessionError};
use crate::core::tick::{game_tick, TickEvent};
use crate::fishing::catalog::Catalog;
use crate::fishing::types::CastError;

/// Safety limit on ticks spent on one cast.
const MAX_TICKS_PER_CAST: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("unknown location {0}")]
    UnknownLocation(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error("cast did not finish within {0} ticks")]
    Stalled(u32),
}

/// Statistics from a single run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub casts: u64,
    /// Indexed by `Rarity as usize`
    pub rarity_counts: [u64; 4],
    pub total_value: u64,
    pub total_size_cm: u64,
    pub total_ticks_to_catch: u64,
    pub announcements: u64,
    pub achievements: u64,
    pub final_level: u32,
    pub final_coins: u64,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig, catalog: &Catalog) -> Result<SimReport, SimError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, catalog, &mut rng)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} casts, {} coins earned, level {}",
                run_idx + 1,
                config.num_runs,
                run_stats.casts,
                run_stats.total_value,
                run_stats.final_level
            );
        }
        all_runs.push(run_stats);
    }

    Ok(SimReport::from_runs(all_runs, config))
}

fn simulate_single_run(
    config: &SimConfig,
    catalog: &Catalog,
    rng: &mut ChaCha8Rng,
) -> Result<RunStats, SimError> {
    let location = catalog
        .location(&config.location_id)
        .ok_or_else(|| SimError::UnknownLocation(config.location_id.clone()))?;

    let mut state = GameState::new(config.engine.clone(), catalog.clone());
    state.login("Симулятор")?;
    if let Some(player) = state.player.as_mut() {
        player.level = player.level.max(location.unlock_level);
    }
    state.select_location(&location.id)?;

    let mut stats = RunStats::default();
    for cast in 0..config.casts_per_run {
        state.start_cast(config.power)?;

        let mut ticks = 0;
        let mut finished = false;
        while !finished {
            if ticks >= MAX_TICKS_PER_CAST {
                return Err(SimError::Stalled(MAX_TICKS_PER_CAST));
            }
            ticks += 1;

            for event in game_tick(&mut state, rng).events {
                match event {
                    TickEvent::CatchResolved(fish) => {
                        stats.casts += 1;
                        stats.rarity_counts[fish.rarity as usize] += 1;
                        stats.total_value += fish.value;
                        stats.total_size_cm += fish.size_cm as u64;
                        stats.total_ticks_to_catch += ticks as u64;
                    }
                    TickEvent::Announcement(_) => stats.announcements += 1,
                    TickEvent::AchievementUnlocked(_) => stats.achievements += 1,
                    TickEvent::CastFinished => finished = true,
                    TickEvent::CastAborted { .. } => finished = true,
                    _ => {}
                }
            }
        }
        debug!("Cast {} finished after {} ticks", cast + 1, ticks);
    }

    if let Some(player) = state.player.as_ref() {
        stats.final_level = player.level;
        stats.final_coins = player.coins;
    }
    Ok(stats)
}
