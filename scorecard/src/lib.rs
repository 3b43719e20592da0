//! # Scorecard
//!
//! Rubric-based scoring for spoken introduction transcripts. Every criterion
//! of a rubric is evaluated with three independent signals:
//!
//! - **Keywords**: whole-word, case-insensitive presence of the criterion's keywords
//! - **Semantics**: embedding similarity between the transcript and the criterion description
//! - **Length**: word count against the criterion's optional bounds
//!
//! The signals are blended with configurable weights into a per-criterion
//! score, the criteria are combined by their rubric weights into an overall
//! score, and every criterion gets actionable feedback.
//!
//! ## Quick Start
//!
//! ```rust
//! use scorecard::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let scorer = TranscriptScorer::new(
//!         Rubric::builtin(),
//!         SignalWeights::default(),
//!         Arc::new(EmbeddingSimilarity::new(HashingEmbedder::default())),
//!     )?;
//!
//!     let result = scorer.score("Hello everyone, my name is Sam.", None)?;
//!     println!("overall: {:.2}", result.overall_score);
//!     Ok(())
//! }
//! ```
//!
//! ## Bring Your Own Embeddings
//!
//! The engine only needs a [`ml::SimilarityProvider`]. Any embedding model can
//! be plugged in through [`ml::EmbeddingModel`] and [`ml::EmbeddingSimilarity`]:
//!
//! - **Hashing**: deterministic offline embeddings, no network required
//! - **Remote**: any OpenAI-compatible `/embeddings` endpoint
//! - **Custom**: implement `EmbeddingModel` or `SimilarityProvider` directly

pub mod config;
pub mod logging;
pub mod ml;
pub mod rubric;
pub mod scorer;
pub mod scoring;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::scorer::TranscriptScorer;

    pub use crate::config::{
        ConfigBuilder, ConfigLoader, EmbeddingConfig, EmbeddingProviderType, LogLevel,
        ScorecardConfig,
    };

    pub use crate::ml::{
        CachedEmbedder, EmbeddingModel, EmbeddingSimilarity, HashingEmbedder, RemoteEmbedder,
        SimilarityProvider,
    };

    pub use crate::rubric::{Criterion, CriterionBuilder, Rubric};

    pub use crate::scoring::{
        CriterionResult, OverallResult, ScoreMetadata, SignalWeights, WeightOverrides, score,
    };

    pub use crate::{Result, ScorecardError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Scorecard operations
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    /// The transcript or the signal weights were rejected before scoring
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The rubric cannot be scored against
    #[error("Invalid rubric: {0}")]
    InvalidRubric(String),

    /// The embedding provider failed while scoring a criterion
    #[error("Embedding provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),
}

impl ScorecardError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ScorecardError::InvalidInput(_) => "invalid_input",
            ScorecardError::InvalidRubric(_) => "invalid_rubric",
            ScorecardError::Provider(_) => "provider_error",
            ScorecardError::Configuration(_) => "configuration_error",
            ScorecardError::Logging(_) => "logging_error",
        }
    }
}

impl From<crate::config::ConfigError> for ScorecardError {
    fn from(err: crate::config::ConfigError) -> Self {
        ScorecardError::Configuration(err.to_string())
    }
}

impl From<crate::ml::error::MLError> for ScorecardError {
    fn from(err: crate::ml::error::MLError) -> Self {
        ScorecardError::Provider(err.to_string())
    }
}

/// Result type for Scorecard operations
pub type Result<T> = std::result::Result<T, ScorecardError>;

/// Build a scorer from the default configuration sources
///
/// Loads `scorecard.toml` (or one of the other default files) when present,
/// then applies `SCORECARD_*` and legacy environment variables.
pub fn init_with_defaults() -> Result<scorer::TranscriptScorer> {
    let config = config::ConfigLoader::new()
        .load_default_files()
        .load_env()
        .load_legacy_env()
        .extract()?;
    init(config)
}

/// Build a scorer from the provided configuration
///
/// Logging is initialized from `config.logging`; an already installed global
/// subscriber is left in place.
///
/// # Examples
///
/// ```rust
/// use scorecard::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::testing().build()?;
///     let scorer = scorecard::init(config)?;
///     let result = scorer.score("Good morning, I am Priya.", None)?;
///     assert!(result.overall_score <= 100.0);
///     Ok(())
/// }
/// ```
pub fn init(config: config::ScorecardConfig) -> Result<scorer::TranscriptScorer> {
    let _ = logging::init(&config.logging);
    scorer::TranscriptScorer::from_config(&config)
}
