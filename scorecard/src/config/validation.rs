//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &ScorecardConfig) -> Result<(), ConfigError> {
    config
        .scoring
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    validate_rubric_config(&config.rubric)?;
    validate_embedding_config(&config.embedding)?;

    Ok(())
}

/// Validate rubric configuration.
fn validate_rubric_config(config: &RubricConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.path
        && path.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Rubric path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate embedding configuration.
fn validate_embedding_config(config: &EmbeddingConfig) -> Result<(), ConfigError> {
    if config.model_name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Embedding model name cannot be empty".to_string(),
        ));
    }

    if config.dimensions == Some(0) {
        return Err(ConfigError::ValidationError(
            "Embedding dimensions must be greater than 0".to_string(),
        ));
    }

    if config.cache_enabled && config.cache_capacity == 0 {
        return Err(ConfigError::ValidationError(
            "Embedding cache capacity must be greater than 0 when caching is enabled".to_string(),
        ));
    }

    match config.provider {
        EmbeddingProviderType::Hashing => {}
        EmbeddingProviderType::Remote => {
            let has_url = config
                .service_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty());
            if !has_url {
                return Err(ConfigError::ValidationError(
                    "Service URL is required for the remote embedding provider".to_string(),
                ));
            }

            if config.timeout_secs == 0 {
                return Err(ConfigError::ValidationError(
                    "Remote embedding timeout must be greater than 0".to_string(),
                ));
            }
        }
    }

    Ok(())
}
