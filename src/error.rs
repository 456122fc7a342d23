//! Error types for the team rating engine
//!
//! Fallible operations return `anyhow::Result`, with `RatingError` carrying
//! the specific failure kinds callers may want to match on.

use crate::types::{SeasonId, TeamId};

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Missing standings for team {team} in season {season}")]
    MissingSeasonData { team: TeamId, season: SeasonId },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("No teams found in standings for season {season}")]
    EmptyStandings { season: SeasonId },

    #[error("Failed to load standings: {message}")]
    StandingsLoad { message: String },
}

impl RatingError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        RatingError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
