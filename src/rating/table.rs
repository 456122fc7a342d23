//! Rating table output types

use crate::types::{Column, SeasonId, TeamId};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use std::fmt;

/// One team's row of the rating table
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRating {
    pub team: TeamId,
    /// Raw season ratings after missing-data fallback, by season offset
    pub raw: Vec<i64>,
    /// Normalized season ratings in `[0, 1]`, by season offset
    pub seasons: Vec<f64>,
    /// Weighted sum of the normalized seasons that count towards the total
    pub total: f64,
}

impl TeamRating {
    /// Normalized rating for the current season
    pub fn current(&self) -> f64 {
        self.seasons[0]
    }

    /// Normalized rating `n` seasons back, if the table covers it
    pub fn prev_season(&self, n: usize) -> Option<f64> {
        self.seasons.get(n).copied()
    }

    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Season(n) => self.prev_season(n),
            Column::Total => Some(self.total),
        }
    }
}

impl Serialize for TeamRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.seasons.len() + 2))?;
        map.serialize_entry("team", &self.team)?;
        for (offset, value) in self.seasons.iter().enumerate() {
            map.serialize_entry(&Column::Season(offset).to_string(), value)?;
        }
        map.serialize_entry("total", &self.total)?;
        map.end()
    }
}

/// Per-team ratings for one build, sorted by total descending
#[derive(Debug, Clone, PartialEq)]
pub struct RatingTable {
    rows: Vec<TeamRating>,
    current_season: SeasonId,
    num_seasons: usize,
    current_season_included: bool,
    weights: Vec<f64>,
    degenerate_columns: Vec<usize>,
}

impl RatingTable {
    pub(crate) fn new(
        rows: Vec<TeamRating>,
        current_season: SeasonId,
        num_seasons: usize,
        current_season_included: bool,
        weights: Vec<f64>,
        degenerate_columns: Vec<usize>,
    ) -> Self {
        Self {
            rows,
            current_season,
            num_seasons,
            current_season_included,
            weights,
            degenerate_columns,
        }
    }

    pub fn rows(&self) -> &[TeamRating] {
        &self.rows
    }

    pub fn get(&self, team: &str) -> Option<&TeamRating> {
        self.rows.iter().find(|row| row.team == team)
    }

    /// Position of a team in the ranking, starting at 1
    pub fn rank(&self, team: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.team == team).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn current_season(&self) -> SeasonId {
        self.current_season
    }

    pub fn num_seasons(&self) -> usize {
        self.num_seasons
    }

    /// Whether the current season contributed to the totals
    pub fn current_season_included(&self) -> bool {
        self.current_season_included
    }

    /// Weights applied to the contributing seasons, most recent first
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Season offsets whose column had no spread
    pub fn degenerate_columns(&self) -> &[usize] {
        &self.degenerate_columns
    }

    /// Output column names: `current`, `prevSeason1`.., `total`
    pub fn column_names(&self) -> Vec<String> {
        (0..self.num_seasons)
            .map(Column::Season)
            .chain(std::iter::once(Column::Total))
            .map(|column| column.to_string())
            .collect()
    }
}

impl Serialize for RatingTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let degenerate: Vec<String> = self
            .degenerate_columns
            .iter()
            .map(|&offset| Column::Season(offset).to_string())
            .collect();

        let mut state = serializer.serialize_struct("RatingTable", 5)?;
        state.serialize_field("season", &self.current_season)?;
        state.serialize_field("currentSeasonIncluded", &self.current_season_included)?;
        state.serialize_field("weights", &self.weights)?;
        state.serialize_field("degenerateColumns", &degenerate)?;
        state.serialize_field("ratings", &self.rows)?;
        state.end()
    }
}

impl fmt::Display for RatingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.team.len())
            .max()
            .unwrap_or(0)
            .max(4);

        write!(f, "{:<width$}", "team", width = width)?;
        for name in self.column_names() {
            write!(f, " {:>11}", name)?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:<width$}", row.team, width = width)?;
            for value in &row.seasons {
                write!(f, " {:>11.3}", value)?;
            }
            writeln!(f, " {:>11.3}", row.total)?;
        }

        Ok(())
    }
}
