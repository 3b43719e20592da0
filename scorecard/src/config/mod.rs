//! Configuration system for Scorecard.
//!
//! This module provides a flexible configuration system that supports loading
//! configuration from multiple sources (files, environment variables, etc.)
//! with proper validation and defaults.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "scorecard.toml",
    "scorecard.yaml",
    "scorecard.yml",
    "scorecard.json",
    ".scorecard/config.toml",
    ".scorecard/config.yaml",
    ".scorecard/config.yml",
    ".scorecard/config.json",
];

/// Environment variable prefix for Scorecard configuration
pub const ENV_PREFIX: &str = "SCORECARD_";

/// Environment variables understood for compatibility with older deployments,
/// mapped to their configuration keys.
pub const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("SEMANTIC_WEIGHT", "scoring.semantic_weight"),
    ("KEYWORD_WEIGHT", "scoring.keyword_weight"),
    ("LENGTH_WEIGHT", "scoring.length_weight"),
    ("RUBRIC_PATH", "rubric.path"),
    ("EMBED_MODEL_NAME", "embedding.model_name"),
];

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
