//! Command definitions
//!
//! This module contains the top-level parser and the command enum.

use crate::args::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scorecard-cli")]
#[command(about = "Score spoken introduction transcripts against a rubric", long_about = None)]
#[command(version = scorecard::VERSION)]
pub struct Cli {
    /// Scorecard configuration file (TOML, YAML or JSON)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json) - use json for tool integration
    #[arg(long, short, default_value = "table", global = true, value_parser = ["table", "json"])]
    pub output: String,

    /// Verbose output (debug level logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress all logging output)
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a transcript
    #[command(
        long_about = r#"
Score a transcript against the rubric. Every criterion is evaluated with
three signals that are blended by the signal weights:

  • keywords - share of the criterion's keywords present as whole words
  • semantic - embedding similarity to the criterion description
  • length   - word count against the criterion's bounds

The transcript is read from FILE, from standard input when FILE is `-` or
input is piped, or from --text.

EXAMPLES:
  scorecard-cli score intro.txt
  echo "Hello everyone, I am Sam." | scorecard-cli score
  scorecard-cli score --text "Hello, my name is Sam." --keyword-weight 0.5 --semantic-weight 0.4
  scorecard-cli score intro.txt --rubric rubric.toml --output json"#
    )]
    Score(ScoreArgs),

    /// Show the rubric transcripts are scored against
    Rubric(RubricArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),

    /// Display version information
    Version,
}
