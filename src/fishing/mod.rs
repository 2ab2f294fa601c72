//! Fishing system: types, reference catalog, catch generation and cast logic.

#![allow(unused_imports)]

pub mod catalog;
pub mod generation;
pub mod logic;
pub mod types;

pub use catalog::*;
pub use generation::*;
pub use logic::*;
pub use types::*;
