//! Error types for ML operations

use std::fmt;
use thiserror::Error;

/// Error type for ML operations
#[derive(Debug, Error)]
pub enum MLError {
    /// Error during embedding generation
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Error talking to a remote embedding service
    #[error("Embedding service error: {0}")]
    Service(String),

    /// Error related to model configuration
    #[error("Model configuration error: {0}")]
    Configuration(String),

    /// Error reading or writing the embedding cache
    #[error("Embedding cache error: {0}")]
    Cache(String),

    /// IO error during model operations
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    /// Other unexpected errors
    #[error("{0}")]
    Other(String),
}

impl MLError {
    /// Create a new embedding error
    pub fn embedding(msg: impl fmt::Display) -> Self {
        Self::Embedding(msg.to_string())
    }

    /// Create a new service error
    pub fn service(msg: impl fmt::Display) -> Self {
        Self::Service(msg.to_string())
    }

    /// Create a new configuration error
    pub fn configuration(msg: impl fmt::Display) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Create a new cache error
    pub fn cache(msg: impl fmt::Display) -> Self {
        Self::Cache(msg.to_string())
    }

    /// Create a new other error
    pub fn other(msg: impl fmt::Display) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<reqwest::Error> for MLError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}

impl From<serde_json::Error> for MLError {
    fn from(err: serde_json::Error) -> Self {
        Self::Cache(err.to_string())
    }
}

/// Result type for ML operations
pub type Result<T> = std::result::Result<T, MLError>;
