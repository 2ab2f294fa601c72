//! Player profile and level progression.

#![allow(unused_imports)]

pub mod player;
pub mod progression;

pub use player::*;
pub use progression::*;
