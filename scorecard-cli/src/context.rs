use scorecard::config::{ConfigLoader, ScorecardConfig};
use scorecard::rubric::Rubric;
use scorecard::scorer::TranscriptScorer;
use std::path::Path;

/// Configuration shared by all commands
pub struct ScorecardCliContext {
    pub config: ScorecardConfig,
}

impl ScorecardCliContext {
    /// Load the default files, the given file and the environment
    pub fn new(config_file: Option<&Path>) -> scorecard::Result<Self> {
        let mut loader = ConfigLoader::new();
        loader.load_default_files();
        if let Some(path) = config_file {
            loader.load_file(path)?;
        }
        let config = loader.load_env().load_legacy_env().extract()?;

        Ok(Self { config })
    }

    /// Wrap an already built configuration
    pub fn from_config(config: ScorecardConfig) -> Self {
        Self { config }
    }

    /// Replace the configured rubric file
    pub fn with_rubric(mut self, rubric: Option<&Path>) -> Self {
        if let Some(path) = rubric {
            self.config.rubric.path = Some(path.to_path_buf());
        }
        self
    }

    /// Load the configured rubric
    pub fn rubric(&self) -> scorecard::Result<Rubric> {
        Rubric::load(self.config.rubric.path.as_deref())
    }

    /// Build a scorer from the configuration
    pub fn scorer(&self) -> scorecard::Result<TranscriptScorer> {
        TranscriptScorer::from_config(&self.config)
    }
}
