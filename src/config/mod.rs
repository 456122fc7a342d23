//! Configuration management for the team-ratings tool
//!
//! This module handles configuration loading from environment variables or
//! TOML files, validation, and default values for rating builds.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::RatingConfig;
