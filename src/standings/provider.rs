//! Standings provider trait and the in-memory standings table

use crate::error::{RatingError, Result};
use crate::types::{SeasonId, SeasonRecord, StandingsEntry, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Trait for supplying standings to the rating engine
#[cfg_attr(test, mockall::automock)]
pub trait StandingsProvider {
    /// Teams taking part in `season`, the rows of a build for that season
    ///
    /// A team counts as taking part when the provider covers the season for
    /// it, even without a usable entry.
    fn teams(&self, season: SeasonId) -> Vec<TeamId>;

    /// Standings record for a team in a season
    ///
    /// Returns `None` when the provider has nothing at all for the pair, and
    /// `Some(SeasonRecord::Unrated)` when the season is covered but the team
    /// has no usable entry.
    fn record(&self, team: &str, season: SeasonId) -> Option<SeasonRecord>;
}

/// In-memory standings keyed by team, then season
///
/// Serialized as `{ "<team>": { "<season>": entry | null } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandingsTable {
    teams: BTreeMap<TeamId, BTreeMap<SeasonId, Option<StandingsEntry>>>,
}

impl StandingsTable {
    /// Create an empty standings table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a team's standings for a season
    pub fn insert(&mut self, team: impl Into<TeamId>, season: SeasonId, entry: StandingsEntry) {
        self.teams
            .entry(team.into())
            .or_default()
            .insert(season, Some(entry));
    }

    /// Mark a season as covered for a team without a usable entry
    pub fn insert_unrated(&mut self, team: impl Into<TeamId>, season: SeasonId) {
        self.teams.entry(team.into()).or_default().insert(season, None);
    }

    /// Builder-style variant of [`StandingsTable::insert`]
    pub fn with_entry(
        mut self,
        team: impl Into<TeamId>,
        season: SeasonId,
        entry: StandingsEntry,
    ) -> Self {
        self.insert(team, season, entry);
        self
    }

    /// Builder-style variant of [`StandingsTable::insert_unrated`]
    pub fn with_unrated(mut self, team: impl Into<TeamId>, season: SeasonId) -> Self {
        self.insert_unrated(team, season);
        self
    }

    /// Parse standings from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            RatingError::StandingsLoad {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load standings from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RatingError::StandingsLoad {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json_str(&contents)
    }

    /// Seasons covered for a team, oldest first
    pub fn seasons_for(&self, team: &str) -> Vec<SeasonId> {
        self.teams
            .get(team)
            .map(|seasons| seasons.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl StandingsProvider for StandingsTable {
    fn teams(&self, season: SeasonId) -> Vec<TeamId> {
        self.teams
            .iter()
            .filter(|(_, seasons)| seasons.contains_key(&season))
            .map(|(team, _)| team.clone())
            .collect()
    }

    fn record(&self, team: &str, season: SeasonId) -> Option<SeasonRecord> {
        self.teams
            .get(team)
            .and_then(|seasons| seasons.get(&season))
            .map(|entry| SeasonRecord::from(*entry))
    }
}
