//! Rating pipeline stages
//!
//! Each stage is a pure function taking the previous stage's value and
//! returning a new one: extraction, missing-data fallback, normalization,
//! weighted totals and finalization. Columns are indexed by season offset,
//! rows follow the order of `teams`.

use crate::error::{RatingError, Result};
use crate::rating::normalization::{min_max_normalize, DegenerateColumnPolicy};
use crate::rating::table::{RatingTable, TeamRating};
use crate::standings::StandingsProvider;
use crate::types::{Column, SeasonId, SeasonRecord, TeamId};
use tracing::{debug, warn};

/// Raw season ratings; `None` marks a team with no usable entry
#[derive(Debug, Clone, PartialEq)]
pub struct RawRatings {
    pub teams: Vec<TeamId>,
    pub columns: Vec<Vec<Option<i64>>>,
}

/// Raw season ratings with every gap filled
#[derive(Debug, Clone, PartialEq)]
pub struct FilledRatings {
    pub teams: Vec<TeamId>,
    pub columns: Vec<Vec<i64>>,
}

/// Season columns scaled to `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRatings {
    pub teams: Vec<TeamId>,
    pub raw: Vec<Vec<i64>>,
    pub columns: Vec<Vec<f64>>,
    /// Offsets of columns that had no spread
    pub degenerate: Vec<usize>,
}

/// Normalized ratings plus each team's weighted total
#[derive(Debug, Clone, PartialEq)]
pub struct TotalledRatings {
    pub normalized: NormalizedRatings,
    pub totals: Vec<f64>,
}

fn lookup(
    standings: &dyn StandingsProvider,
    team: &str,
    season: SeasonId,
) -> Result<SeasonRecord> {
    standings.record(team, season).ok_or_else(|| {
        RatingError::MissingSeasonData {
            team: team.to_string(),
            season,
        }
        .into()
    })
}

/// Stage 1: points plus goal difference for every team and season offset
pub fn extract_raw_ratings(
    standings: &dyn StandingsProvider,
    teams: &[TeamId],
    current_season: SeasonId,
    num_seasons: usize,
) -> Result<RawRatings> {
    let mut columns = Vec::with_capacity(num_seasons);

    for offset in 0..num_seasons {
        let season = SeasonId::try_from(offset)
            .ok()
            .and_then(|offset| current_season.checked_sub(offset))
            .ok_or_else(|| {
                RatingError::invalid_config(format!(
                    "Season {} has no {} seasons of history",
                    current_season, num_seasons
                ))
            })?;
        let column = teams
            .iter()
            .map(|team| lookup(standings, team, season).map(|record| record.rating()))
            .collect::<Result<Vec<_>>>()?;
        columns.push(column);
    }

    Ok(RawRatings {
        teams: teams.to_vec(),
        columns,
    })
}

/// Games played in the current season, counting unrated teams as zero
pub fn current_season_played(
    standings: &dyn StandingsProvider,
    teams: &[TeamId],
    current_season: SeasonId,
) -> Result<Vec<u32>> {
    teams
        .iter()
        .map(|team| lookup(standings, team, current_season).map(|record| record.played()))
        .collect()
}

/// Stage 2: replace each missing rating with the lowest rating in its column
pub fn fill_missing(raw: RawRatings) -> FilledRatings {
    let columns: Vec<Vec<i64>> = raw
        .columns
        .into_iter()
        .enumerate()
        .map(|(offset, column)| {
            let floor = match column.iter().flatten().min() {
                Some(&min) => min,
                None => {
                    warn!(
                        "No team has a rating for {}; filling the column with 0",
                        Column::Season(offset)
                    );
                    0
                }
            };

            let missing = column.iter().filter(|value| value.is_none()).count();
            if missing > 0 {
                debug!(
                    "Filled {} missing {} rating(s) with {}",
                    missing,
                    Column::Season(offset),
                    floor
                );
            }

            column
                .into_iter()
                .map(|value| value.unwrap_or(floor))
                .collect::<Vec<_>>()
        })
        .collect();

    FilledRatings {
        teams: raw.teams,
        columns,
    }
}

/// Stage 4: min-max scale every season column independently
pub fn normalize(filled: FilledRatings, policy: DegenerateColumnPolicy) -> NormalizedRatings {
    let mut columns = Vec::with_capacity(filled.columns.len());
    let mut degenerate = Vec::new();

    for (offset, column) in filled.columns.iter().enumerate() {
        let normalized = min_max_normalize(column, policy);
        if normalized.degenerate {
            warn!(
                "All teams share the same {} rating; assigning {} to every team",
                Column::Season(offset),
                policy.value()
            );
            degenerate.push(offset);
        }
        columns.push(normalized.values);
    }

    NormalizedRatings {
        teams: filled.teams,
        raw: filled.columns,
        columns,
        degenerate,
    }
}

/// Stage 5: weighted sum over the seasons that count towards the total
///
/// `weights[0]` applies to the current season when it is included and to
/// the previous season otherwise.
pub fn weighted_totals(
    normalized: NormalizedRatings,
    weights: &[f64],
    include_current: bool,
) -> TotalledRatings {
    let start = if include_current { 0 } else { 1 };
    let mut totals = vec![0.0; normalized.teams.len()];

    for (weight, column) in weights.iter().zip(normalized.columns.iter().skip(start)) {
        for (total, value) in totals.iter_mut().zip(column) {
            *total += weight * value;
        }
    }

    TotalledRatings { normalized, totals }
}

/// Assemble the output table, sorted by total descending
///
/// Ties keep their input order.
pub fn finalize(
    totalled: TotalledRatings,
    current_season: SeasonId,
    include_current: bool,
    weights: Vec<f64>,
) -> RatingTable {
    let TotalledRatings { normalized, totals } = totalled;
    let num_seasons = normalized.columns.len();

    let mut rows: Vec<TeamRating> = normalized
        .teams
        .into_iter()
        .enumerate()
        .map(|(row, team)| TeamRating {
            team,
            raw: normalized.raw.iter().map(|column| column[row]).collect(),
            seasons: normalized.columns.iter().map(|column| column[row]).collect(),
            total: totals[row],
        })
        .collect();

    rows.sort_by(|a, b| b.total.total_cmp(&a.total));

    RatingTable::new(
        rows,
        current_season,
        num_seasons,
        include_current,
        weights,
        normalized.degenerate,
    )
}
