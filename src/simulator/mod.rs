//! Catch balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of seeded casts to analyze:
//! - Rarity rates at a given cast power
//! - Average coin value and fish size
//! - How fast players level up
//!
//! The simulator drives `game_tick()` on a real `GameState`, so results
//! match what players experience.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats, SimError};
