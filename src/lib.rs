//! Smiley Fisher - fishing game logic library
//!
//! This crate holds everything behind the game's screens: the catch
//! resolution engine, the tick-driven cast lifecycle, the player session
//! and the reference data. Presentation code drives [`game_tick`]
//! and renders the [`TickEvent`]s it returns.

pub mod achievements;
pub mod character;
pub mod core;
pub mod fishing;
pub mod locations;
pub mod simulator;
pub mod social;

pub use crate::core::config::EngineConfig;
pub use crate::core::game_state::GameState;
pub use crate::core::tick::{game_tick, TickEvent, TickResult};
