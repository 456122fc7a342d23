//! Main application configuration
//!
//! This module defines the top-level configuration for the team-ratings
//! tool, including environment variable and TOML file loading and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "team-ratings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file; missing keys take defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Build configuration from defaults overridden by `lookup(name)` values
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Service settings
        if let Some(name) = lookup("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Rating settings
        if let Some(seasons) = lookup("RATING_NUM_SEASONS") {
            config.rating.num_seasons = seasons
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_NUM_SEASONS value: {}", seasons))?;
        }
        if let Some(threshold) = lookup("RATING_GAMES_THRESHOLD") {
            config.rating.games_threshold = threshold
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_GAMES_THRESHOLD value: {}", threshold))?;
        }
        if let Some(ratio) = lookup("RATING_WEIGHT_RATIO") {
            config.rating.weighting.ratio = ratio
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_WEIGHT_RATIO value: {}", ratio))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RatingError;
    use crate::rating::DegenerateColumnPolicy;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.rating.num_seasons, 3);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "debug"),
            ("RATING_NUM_SEASONS", "2"),
            ("RATING_GAMES_THRESHOLD", "10"),
            ("RATING_WEIGHT_RATIO", "3.0"),
        ]))
        .unwrap();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.rating.num_seasons, 2);
        assert_eq!(config.rating.games_threshold, 10);
        assert_eq!(config.rating.weighting.ratio, 3.0);
    }

    #[test]
    fn test_env_parse_errors() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("RATING_NUM_SEASONS", "three")])).unwrap_err();
        assert!(err.to_string().contains("RATING_NUM_SEASONS"));

        let err = AppConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_env_values_are_validated() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("RATING_GAMES_THRESHOLD", "-4")])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [service]
            log_level = "warn"

            [rating]
            num_seasons = 4
            games_threshold = 8
            degenerate_column = { fixed = 0.0 }

            [rating.weighting]
            ratio = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.service.name, "team-ratings");
        assert_eq!(config.rating.num_seasons, 4);
        assert_eq!(config.rating.games_threshold, 8);
        assert_eq!(config.rating.weighting.ratio, 2.0);
        assert_eq!(config.rating.weighting.max_seasons, 4);
        assert_eq!(
            config.rating.degenerate_column,
            DegenerateColumnPolicy::Fixed(0.0)
        );
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(AppConfig::from_toml_str("[rating]\nnum_seasons = 0\n").is_err());
        assert!(AppConfig::from_toml_str("[rating]\nnum_seasons = \"x\"\n").is_err());
    }

    #[test]
    fn test_from_missing_file() {
        let err = AppConfig::from_file("/nonexistent/team-ratings.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/team-ratings.toml"));
    }
}
