//! Configuration model definitions.
//!
//! This module contains the configuration structures for all Scorecard components.

use crate::scoring::SignalWeights;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Scorecard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScorecardConfig {
    /// Default signal weights, overridable per request
    pub scoring: SignalWeights,

    /// Rubric source configuration
    pub rubric: RubricConfig,

    /// Embedding provider configuration
    pub embedding: EmbeddingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Where the rubric comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RubricConfig {
    /// Rubric file (TOML, YAML or JSON). The builtin rubric is used when unset.
    pub path: Option<PathBuf>,
}

/// Embedding provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Which provider computes embeddings
    pub provider: EmbeddingProviderType,

    /// Model name sent to remote services and reported in metadata
    pub model_name: String,

    /// Base URL of an OpenAI-compatible embedding service (remote provider only)
    pub service_url: Option<String>,

    /// Bearer token for the remote service
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Expected embedding dimensions; also the hashing embedder's output size
    pub dimensions: Option<usize>,

    /// Remote request timeout in seconds
    pub timeout_secs: u64,

    /// Whether embeddings are cached in memory
    pub cache_enabled: bool,

    /// Maximum number of cached embeddings
    pub cache_capacity: usize,

    /// Directory where the embedding cache is persisted (in-memory only when unset)
    pub cache_dir: Option<PathBuf>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderType::Hashing,
            model_name: "all-MiniLM-L6-v2".to_string(),
            service_url: None,
            api_key: None,
            dimensions: None,
            timeout_secs: 30,
            cache_enabled: true,
            cache_capacity: 1024,
            cache_dir: None,
        }
    }
}

/// Embedding provider type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderType {
    /// Deterministic offline feature-hashing embeddings
    Hashing,

    /// OpenAI-compatible remote embedding service
    Remote,
}

impl fmt::Display for EmbeddingProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingProviderType::Hashing => write!(f, "hashing"),
            EmbeddingProviderType::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for EmbeddingProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hashing" | "offline" => Ok(EmbeddingProviderType::Hashing),
            "remote" | "openai" => Ok(EmbeddingProviderType::Remote),
            _ => Err(format!("Invalid embedding provider: {}", s)),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
