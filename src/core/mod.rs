//! Core session state, configuration and tick orchestration.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod game_state;
pub mod tick;

pub use config::*;
pub use constants::*;
pub use game_state::*;
pub use tick::*;
