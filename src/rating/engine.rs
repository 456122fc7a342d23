//! Team rating engine
//!
//! Builds a table of cross-season team ratings from league standings. Each
//! season's rating is points plus goal difference; seasons are normalized
//! independently and combined with recency weights into a single total.

use crate::config::RatingConfig;
use crate::error::{RatingError, Result};
use crate::rating::stages;
use crate::rating::table::RatingTable;
use crate::standings::StandingsProvider;
use crate::types::{SeasonId, TeamId};
use std::time::Instant;
use tracing::{debug, info};

/// Computes team rating tables from standings
#[derive(Debug, Clone, Default)]
pub struct RatingEngine {
    config: RatingConfig,
}

impl RatingEngine {
    /// Create a new rating engine
    pub fn new(config: RatingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Build the rating table using the configured games threshold and
    /// season count
    pub fn build(
        &self,
        standings: &dyn StandingsProvider,
        current_season: SeasonId,
    ) -> Result<RatingTable> {
        self.build_with(
            standings,
            current_season,
            self.config.games_threshold,
            self.config.num_seasons,
        )
    }

    /// Build the rating table over `num_seasons` seasons ending at
    /// `current_season`
    ///
    /// Rows are the teams `standings` lists for `current_season`. Every team
    /// needs a record for every season in range, otherwise the build fails with
    /// [`RatingError::MissingSeasonData`] and no table is produced.
    pub fn build_with(
        &self,
        standings: &dyn StandingsProvider,
        current_season: SeasonId,
        games_threshold: i32,
        num_seasons: usize,
    ) -> Result<RatingTable> {
        let started = Instant::now();

        self.validate_request(games_threshold, num_seasons)?;
        let teams = teams_for(standings, current_season)?;

        info!(
            "Building team ratings for season {} ({} teams, {} seasons)",
            current_season,
            teams.len(),
            num_seasons
        );

        let raw = stages::extract_raw_ratings(standings, &teams, current_season, num_seasons)?;

        // With a single season there is nothing else to weight
        let include_current = if num_seasons == 1 {
            true
        } else {
            Self::include_current_season(standings, current_season, games_threshold)?
        };

        let filled = stages::fill_missing(raw);
        let normalized = stages::normalize(filled, self.config.degenerate_column);

        let weights = self
            .config
            .weighting
            .effective_weights(num_seasons, include_current)?;
        debug!("Season weights (most recent first): {:?}", weights);

        let totalled = stages::weighted_totals(normalized, &weights, include_current);
        let table = stages::finalize(totalled, current_season, include_current, weights);

        debug!(
            "Built team ratings for season {} in {:?}",
            current_season,
            started.elapsed()
        );

        Ok(table)
    }

    /// Whether the current season has enough games to count towards totals
    ///
    /// The current season is excluded only when every team has played at
    /// most `games_threshold` games.
    pub fn include_current_season(
        standings: &dyn StandingsProvider,
        current_season: SeasonId,
        games_threshold: i32,
    ) -> Result<bool> {
        validate_games_threshold(games_threshold)?;

        let teams = teams_for(standings, current_season)?;
        let played = stages::current_season_played(standings, &teams, current_season)?;

        if played
            .iter()
            .all(|&games| i64::from(games) <= i64::from(games_threshold))
        {
            info!(
                "Current season {} excluded from team ratings; teams must have played more than {} games",
                current_season, games_threshold
            );
            return Ok(false);
        }

        Ok(true)
    }

    fn validate_request(&self, games_threshold: i32, num_seasons: usize) -> Result<()> {
        if num_seasons < 1 {
            return Err(RatingError::invalid_config("Number of seasons must be at least 1").into());
        }

        let max_seasons = self.config.weighting.max_seasons;
        if num_seasons > max_seasons {
            return Err(RatingError::invalid_config(format!(
                "Number of seasons must not exceed {}, got {}",
                max_seasons, num_seasons
            ))
            .into());
        }

        validate_games_threshold(games_threshold)
    }
}

fn validate_games_threshold(games_threshold: i32) -> Result<()> {
    if games_threshold < 0 {
        return Err(RatingError::invalid_config(format!(
            "Games threshold must be non-negative, got {}",
            games_threshold
        ))
        .into());
    }
    Ok(())
}

fn teams_for(standings: &dyn StandingsProvider, current_season: SeasonId) -> Result<Vec<TeamId>> {
    let teams = standings.teams(current_season);
    if teams.is_empty() {
        return Err(RatingError::EmptyStandings {
            season: current_season,
        }
        .into());
    }
    Ok(teams)
}
