//! Team Ratings - cross-season composite ratings for league teams
//!
//! This crate computes a normalized rating per team from several seasons of
//! league standings, weighting recent seasons more heavily, for ranking
//! teams and feeding downstream match prediction.

pub mod config;
pub mod error;
pub mod rating;
pub mod standings;
pub mod types;

// Re-export commonly used types
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{RatingEngine, RatingTable, TeamRating};
pub use standings::{StandingsProvider, StandingsTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
