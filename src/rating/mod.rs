//! Cross-season team rating computation
//!
//! This module turns per-season standings into normalized season ratings
//! and a recency-weighted total used to rank teams.

pub mod engine;
pub mod normalization;
pub mod stages;
pub mod table;
pub mod weighting;

// Re-export commonly used types
pub use engine::RatingEngine;
pub use normalization::DegenerateColumnPolicy;
pub use table::{RatingTable, TeamRating};
pub use weighting::SeasonWeighting;
