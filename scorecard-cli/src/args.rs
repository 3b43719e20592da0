//! Command argument structures

use clap::Args;
use scorecard::scoring::WeightOverrides;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ScoreArgs {
    /// Transcript file to score; `-` reads standard input
    pub file: Option<PathBuf>,

    /// Transcript text given inline instead of a file
    #[arg(long, short, conflicts_with = "file")]
    pub text: Option<String>,

    /// Rubric file (TOML, YAML or JSON) replacing the configured rubric
    #[arg(long, short)]
    pub rubric: Option<PathBuf>,

    /// Weight of the semantic similarity signal (0.0 to 1.0)
    #[arg(long)]
    pub semantic_weight: Option<f64>,

    /// Weight of the keyword signal (0.0 to 1.0)
    #[arg(long)]
    pub keyword_weight: Option<f64>,

    /// Weight of the word-count signal (0.0 to 1.0)
    #[arg(long)]
    pub length_weight: Option<f64>,
}

impl ScoreArgs {
    /// Weights given on the command line, if any
    pub fn weight_overrides(&self) -> Option<WeightOverrides> {
        let overrides = WeightOverrides {
            semantic_weight: self.semantic_weight,
            keyword_weight: self.keyword_weight,
            length_weight: self.length_weight,
        };
        (!overrides.is_empty()).then_some(overrides)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct RubricArgs {
    /// Rubric file to show instead of the configured rubric
    #[arg(long, short)]
    pub rubric: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[clap(name = "powershell")]
    Power,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::Power => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
