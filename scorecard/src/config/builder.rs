//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::scoring::SignalWeights;
use std::path::Path;

/// Builder for creating ScorecardConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ScorecardConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ScorecardConfig::default(),
        }
    }

    /// Set the default signal weights.
    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.config.scoring = weights;
        self
    }

    /// Load the rubric from a file instead of using the builtin rubric.
    pub fn with_rubric_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.rubric.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use the builtin rubric.
    pub fn with_builtin_rubric(mut self) -> Self {
        self.config.rubric.path = None;
        self
    }

    /// Set the embedding model name.
    pub fn with_embedding_model(mut self, model_name: impl Into<String>) -> Self {
        self.config.embedding.model_name = model_name.into();
        self
    }

    /// Use the deterministic offline embedder.
    pub fn with_hashing_embeddings(mut self) -> Self {
        self.config.embedding.provider = EmbeddingProviderType::Hashing;
        self.config.embedding.service_url = None;
        self
    }

    /// Use a remote OpenAI-compatible embedding service.
    pub fn with_remote_embeddings(mut self, url: impl Into<String>) -> Self {
        self.config.embedding.provider = EmbeddingProviderType::Remote;
        self.config.embedding.service_url = Some(url.into());
        self
    }

    /// Set the API key sent to the remote embedding service.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.embedding.api_key = Some(api_key.into());
        self
    }

    /// Set the expected embedding dimensions.
    pub fn with_embedding_dimensions(mut self, dimensions: usize) -> Self {
        self.config.embedding.dimensions = Some(dimensions);
        self
    }

    /// Persist the embedding cache in the given directory.
    pub fn with_cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.embedding.cache_enabled = true;
        self.config.embedding.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Disable embedding caching entirely.
    pub fn without_cache(mut self) -> Self {
        self.config.embedding.cache_enabled = false;
        self.config.embedding.cache_dir = None;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use default logging configuration (console output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging.level = LogLevel::Info;
        self.config.logging.format = LogFormat::Json;
        self.config.logging.file = None;

        self
    }

    /// Create a configuration for development.
    ///
    /// - Builtin rubric
    /// - Offline hashing embeddings
    /// - Debug-level logging
    pub fn development() -> Self {
        Self::new()
            .with_builtin_rubric()
            .with_hashing_embeddings()
            .with_log_level(LogLevel::Debug)
    }

    /// Create a configuration for testing.
    ///
    /// Same as [`ConfigBuilder::development`] without any on-disk cache.
    pub fn testing() -> Self {
        Self::development().without_cache()
    }

    /// Create a production configuration from the default files and environment.
    ///
    /// Falls back to plain defaults when nothing could be loaded.
    pub fn production() -> Self {
        let loaded = super::ConfigLoader::new()
            .load_default_files()
            .load_env()
            .load_legacy_env()
            .extract();
        let config = match loaded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default configuration: {}", e);
                ScorecardConfig::default()
            }
        };

        Self { config }.with_default_logging()
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<ScorecardConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
