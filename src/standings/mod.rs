//! Standings input for the rating engine
//!
//! This module defines the data contract the engine consumes (per-team,
//! per-season standings) and an in-memory table that satisfies it.

pub mod provider;

pub use provider::{StandingsProvider, StandingsTable};
