//! Chat log and leaderboard.

#![allow(unused_imports)]

pub mod chat;
pub mod leaderboard;

pub use chat::*;
pub use leaderboard::*;
