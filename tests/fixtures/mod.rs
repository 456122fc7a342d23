//! Standings fixtures shared by the integration tests

#![allow(dead_code)]

use team_ratings::{SeasonId, StandingsEntry, StandingsTable};

pub const CURRENT_SEASON: SeasonId = 2024;

/// Standings entry whose rating (points + goal difference) is `rating`
pub fn entry(rating: i64, played: u32) -> StandingsEntry {
    if rating >= 0 {
        StandingsEntry::new(rating as u32, 0, played)
    } else {
        StandingsEntry::new(0, rating as i32, played)
    }
}

/// Three teams over two seasons: current ratings A=40, B=20, C=10 with
/// every team on `current_played` games, previous ratings A=50, B=30, C=10
pub fn three_team_standings(current_played: u32) -> StandingsTable {
    StandingsTable::new()
        .with_entry("A", CURRENT_SEASON, entry(40, current_played))
        .with_entry("A", CURRENT_SEASON - 1, entry(50, 38))
        .with_entry("B", CURRENT_SEASON, entry(20, current_played))
        .with_entry("B", CURRENT_SEASON - 1, entry(30, 38))
        .with_entry("C", CURRENT_SEASON, entry(10, current_played))
        .with_entry("C", CURRENT_SEASON - 1, entry(10, 38))
}

/// A 20-team league over `num_seasons` seasons
///
/// Ratings vary by team and season so that no column is degenerate.
pub fn league(num_seasons: usize, current_played: u32) -> StandingsTable {
    let mut standings = StandingsTable::new();

    for team in 0..20u32 {
        let name = format!("Team {:02}", team);
        for offset in 0..num_seasons {
            let season = CURRENT_SEASON - offset as SeasonId;
            let played = if offset == 0 { current_played } else { 38 };
            let points = (team * 3 + offset as u32 * 7) % 61 + 20;
            let goal_difference = (team as i32 * 5 + offset as i32 * 11) % 41 - 20;
            standings.insert(
                name.clone(),
                season,
                StandingsEntry::new(points, goal_difference, played),
            );
        }
    }

    standings
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
