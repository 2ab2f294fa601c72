//! World map locations.
//!
//! Each location offers its own subset of the species table and is gated
//! behind a minimum player level.

mod data;

#[allow(unused_imports)]
pub use data::*;
