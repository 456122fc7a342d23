//! Season weighting
//!
//! Seasons are weighted geometrically by recency. The base sequence holds
//! `max_seasons` weights, most recent first; a build uses a prefix of it and
//! renormalizes the prefix to sum to one.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Geometric season weighting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonWeighting {
    /// Weight of the oldest season in the base sequence
    pub scale: f64,
    /// Ratio between consecutive seasons; higher favours recent seasons more
    pub ratio: f64,
    /// Length of the base sequence, and so the most seasons a build can use
    pub max_seasons: usize,
}

impl Default for SeasonWeighting {
    fn default() -> Self {
        Self {
            scale: 0.01,
            ratio: 2.5,
            max_seasons: 4,
        }
    }
}

impl SeasonWeighting {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(RatingError::invalid_config("Weight scale must be positive").into());
        }

        if !(self.ratio > 0.0 && self.ratio.is_finite()) {
            return Err(RatingError::invalid_config("Weight ratio must be positive").into());
        }

        if self.max_seasons == 0 {
            return Err(RatingError::invalid_config("Max seasons must be at least 1").into());
        }

        Ok(())
    }

    /// Unnormalized base sequence, most recent season first
    pub fn base_weights(&self) -> Vec<f64> {
        (0..self.max_seasons)
            .map(|i| self.scale * self.ratio.powi((self.max_seasons - 1 - i) as i32))
            .collect()
    }

    /// First `count` weights of the base sequence, renormalized to sum to one
    pub fn weights(&self, count: usize) -> Result<Vec<f64>> {
        if count == 0 || count > self.max_seasons {
            return Err(RatingError::invalid_config(format!(
                "Cannot weight {} seasons; expected between 1 and {}",
                count, self.max_seasons
            ))
            .into());
        }

        let weights: Vec<f64> = self.base_weights().into_iter().take(count).collect();
        let sum: f64 = weights.iter().sum();

        Ok(weights.into_iter().map(|w| w / sum).collect())
    }

    /// Weights for the seasons that contribute to the total
    ///
    /// With the current season excluded only `num_seasons - 1` seasons are
    /// summed, so the prefix is one shorter and its first weight goes to the
    /// previous season.
    pub fn effective_weights(&self, num_seasons: usize, include_current: bool) -> Result<Vec<f64>> {
        let count = if include_current {
            num_seasons
        } else {
            num_seasons.saturating_sub(1)
        };
        self.weights(count)
    }
}
