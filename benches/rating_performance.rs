//! Performance benchmarks for rating table builds

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use team_ratings::rating::weighting::SeasonWeighting;
use team_ratings::{RatingEngine, StandingsEntry, StandingsTable};

const CURRENT_SEASON: i32 = 2024;

fn create_league(num_teams: u32, num_seasons: usize, current_played: u32) -> StandingsTable {
    let mut standings = StandingsTable::new();

    for team in 0..num_teams {
        for offset in 0..num_seasons {
            let played = if offset == 0 { current_played } else { 38 };
            standings.insert(
                format!("Team {:03}", team),
                CURRENT_SEASON - offset as i32,
                StandingsEntry::new(
                    (team * 7 + offset as u32 * 13) % 90,
                    (team as i32 * 3 - offset as i32 * 5) % 50,
                    played,
                ),
            );
        }
    }

    standings
}

fn bench_rating_builds(c: &mut Criterion) {
    let engine = RatingEngine::default();
    let league = create_league(20, 3, 20);
    let early_season = create_league(20, 3, 2);

    c.bench_function("build_20_teams_3_seasons", |b| {
        b.iter(|| engine.build_with(black_box(&league), CURRENT_SEASON, 5, 3))
    });

    c.bench_function("build_20_teams_current_excluded", |b| {
        b.iter(|| engine.build_with(black_box(&early_season), CURRENT_SEASON, 5, 3))
    });

    let large_league = create_league(500, 4, 20);
    c.bench_function("build_500_teams_4_seasons", |b| {
        b.iter(|| engine.build_with(black_box(&large_league), CURRENT_SEASON, 5, 4))
    });
}

fn bench_season_weights(c: &mut Criterion) {
    let weighting = SeasonWeighting::default();

    c.bench_function("season_weights", |b| {
        b.iter(|| weighting.effective_weights(black_box(3), black_box(true)))
    });
}

criterion_group!(benches, bench_rating_builds, bench_season_weights);
criterion_main!(benches);
