//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};

/// Team name as it appears in the standings
pub type TeamId = String;

/// Season identifier, e.g. the year the season started
pub type SeasonId = i32;

/// One team's accumulated standings for one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    pub points: u32,
    #[serde(alias = "gD")]
    pub goal_difference: i32,
    pub played: u32,
}

impl StandingsEntry {
    pub fn new(points: u32, goal_difference: i32, played: u32) -> Self {
        Self {
            points,
            goal_difference,
            played,
        }
    }

    /// Single-number season strength: points plus goal difference
    pub fn rating(&self) -> i64 {
        i64::from(self.points) + i64::from(self.goal_difference)
    }
}

/// What the standings hold for a team in a season it is expected to cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonRecord {
    /// The team has a standings entry for the season
    Recorded(StandingsEntry),
    /// The season is known but the team has no usable entry (e.g. it played
    /// in a lower division)
    Unrated,
}

impl SeasonRecord {
    pub fn entry(&self) -> Option<&StandingsEntry> {
        match self {
            SeasonRecord::Recorded(entry) => Some(entry),
            SeasonRecord::Unrated => None,
        }
    }

    pub fn rating(&self) -> Option<i64> {
        self.entry().map(StandingsEntry::rating)
    }

    /// Games played, counting an unrated season as none
    pub fn played(&self) -> u32 {
        self.entry().map(|entry| entry.played).unwrap_or(0)
    }
}

impl From<Option<StandingsEntry>> for SeasonRecord {
    fn from(entry: Option<StandingsEntry>) -> Self {
        match entry {
            Some(entry) => SeasonRecord::Recorded(entry),
            None => SeasonRecord::Unrated,
        }
    }
}

/// A column of the rating table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Season `n` seasons before the current one; offset 0 is the current season
    Season(usize),
    Total,
}

impl Column {
    pub fn current() -> Self {
        Column::Season(0)
    }

    /// Parse an output column name (`current`, `prevSeason{n}`, `total`)
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "current" => Some(Column::Season(0)),
            "total" => Some(Column::Total),
            _ => name
                .strip_prefix("prevSeason")
                .and_then(|n| n.parse().ok())
                .map(Column::Season),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::Season(0) => write!(f, "current"),
            Column::Season(n) => write!(f, "prevSeason{}", n),
            Column::Total => write!(f, "total"),
        }
    }
}
