//! Command-line entry point for computing team ratings
//!
//! Loads configuration and a standings file, builds the rating table for
//! the requested season and prints it.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use team_ratings::config::{validate_config, AppConfig};
use team_ratings::{RatingEngine, RatingTable, SeasonId, StandingsTable};
use tracing::{error, info};

/// Output format for the rating table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Team Ratings - cross-season composite ratings from league standings
#[derive(Parser)]
#[command(
    name = "team-ratings",
    version,
    about = "Compute cross-season composite team ratings from league standings",
    long_about = "Computes a normalized rating per team from the current and previous seasons' \
                 standings (points plus goal difference), weighting recent seasons more heavily. \
                 The current season is left out of the total until some team has played more \
                 than the games threshold."
)]
struct Args {
    /// Standings file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "dry_run",
        help = "Path to standings JSON: { team: { season: {points, goalDifference, played} | null } }"
    )]
    standings: Option<PathBuf>,

    /// Current season
    #[arg(
        long,
        value_name = "SEASON",
        required_unless_present = "dry_run",
        help = "Current (possibly in-progress) season identifier"
    )]
    season: Option<SeasonId>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Games threshold override
    #[arg(
        short,
        long,
        value_name = "GAMES",
        help = "Games every team may have played before the current season counts"
    )]
    games_threshold: Option<i32>,

    /// Season count override
    #[arg(
        short,
        long,
        value_name = "N",
        help = "Number of seasons to rate, including the current one"
    )]
    num_seasons: Option<usize>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without building ratings")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(threshold) = args.games_threshold {
        config.rating.games_threshold = threshold;
    }

    if let Some(num_seasons) = args.num_seasons {
        config.rating.num_seasons = num_seasons;
    }

    validate_config(&config)?;
    Ok(config)
}

fn display_settings(config: &AppConfig) {
    info!("{}", config.service.name);
    info!("   Seasons: {}", config.rating.num_seasons);
    info!("   Games threshold: {}", config.rating.games_threshold);
    info!("   Weight ratio: {}", config.rating.weighting.ratio);
    info!("   Degenerate columns: {:?}", config.rating.degenerate_column);
}

fn render(table: &RatingTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
    }
}

fn run(args: &Args, config: AppConfig) -> Result<()> {
    let (Some(standings_path), Some(season)) = (&args.standings, args.season) else {
        return Err(anyhow!("Both --standings and --season are required"));
    };

    info!("Loading standings from: {}", standings_path.display());
    let standings = StandingsTable::from_json_file(standings_path)?;

    let engine = RatingEngine::new(config.rating)?;
    let table = engine.build(&standings, season)?;

    println!("{}", render(&table, args.format)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_settings(&config);
        info!("Dry run completed - exiting without building ratings");
        return Ok(());
    }

    display_settings(&config);

    if let Err(e) = run(&args, config) {
        error!("Failed to build team ratings: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
