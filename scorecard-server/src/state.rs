//! Application state management

use std::sync::Arc;

use scorecard::scorer::TranscriptScorer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Scorer holding the loaded rubric and similarity provider
    pub scorer: Arc<TranscriptScorer>,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(scorer: TranscriptScorer, config: ServerConfig) -> Self {
        Self {
            scorer: Arc::new(scorer),
            config,
        }
    }
}
