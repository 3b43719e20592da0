//! Command handlers for the Scorecard CLI

pub mod rubric;
pub mod score;

pub use rubric::handle_rubric_command;
pub use score::{handle_score_command, read_transcript};

use crate::args::CompletionsArgs;
use crate::commands::Cli;
use clap::CommandFactory;
use std::io::Write;

/// Write a completion script for the requested shell
pub fn handle_completions_command(args: CompletionsArgs, out: &mut dyn Write) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(
        clap_complete::Shell::from(args.shell),
        &mut command,
        name,
        out,
    );
}
