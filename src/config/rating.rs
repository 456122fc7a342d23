//! Rating engine configuration

use crate::error::{RatingError, Result};
use crate::rating::normalization::DegenerateColumnPolicy;
use crate::rating::weighting::SeasonWeighting;
use serde::{Deserialize, Serialize};

/// Settings for a rating build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Number of seasons to rate, including the current one
    pub num_seasons: usize,
    /// The current season counts only once some team has played more
    /// games than this
    pub games_threshold: i32,
    pub weighting: SeasonWeighting,
    pub degenerate_column: DegenerateColumnPolicy,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            num_seasons: 3,
            games_threshold: 5,
            weighting: SeasonWeighting::default(),
            degenerate_column: DegenerateColumnPolicy::default(),
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.weighting.validate()?;
        self.degenerate_column.validate()?;

        if self.num_seasons < 1 {
            return Err(RatingError::invalid_config("Number of seasons must be at least 1").into());
        }

        if self.num_seasons > self.weighting.max_seasons {
            return Err(RatingError::invalid_config(format!(
                "Number of seasons must not exceed {}, got {}",
                self.weighting.max_seasons, self.num_seasons
            ))
            .into());
        }

        if self.games_threshold < 0 {
            return Err(RatingError::invalid_config(format!(
                "Games threshold must be non-negative, got {}",
                self.games_threshold
            ))
            .into());
        }

        Ok(())
    }
}
