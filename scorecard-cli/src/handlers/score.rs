//! Score command handler

use crate::args::ScoreArgs;
use crate::context::ScorecardCliContext;
use crate::output::*;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use scorecard::ScorecardError;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub fn handle_score_command(
    args: ScoreArgs,
    ctx: ScorecardCliContext,
    output_format: &str,
) -> scorecard::Result<()> {
    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let transcript = read_transcript(&args, stdin.lock(), stdin_is_terminal)?;
    debug!(chars = transcript.len(), "Transcript read");

    let ctx = ctx.with_rubric(args.rubric.as_deref());
    let scorer = ctx.scorer()?;
    let overrides = args.weight_overrides();

    let spinner = (output_format != "json" && io::stderr().is_terminal()).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scoring transcript...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = scorer.score(&transcript, overrides.as_ref());

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let result = result?;

    if output_format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_score_result(&result);
    }

    Ok(())
}

/// Resolve the transcript from `--text`, a file, or standard input
///
/// Standard input is read when the file is `-`, or when no source is given
/// and input is piped.
pub fn read_transcript<R: Read>(
    args: &ScoreArgs,
    mut stdin: R,
    stdin_is_terminal: bool,
) -> scorecard::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    match args.file.as_deref() {
        Some(path) if path == Path::new("-") => read_all(&mut stdin),
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            ScorecardError::InvalidInput(format!(
                "Failed to read transcript file {}: {}",
                path.display(),
                e
            ))
        }),
        None if !stdin_is_terminal => read_all(&mut stdin),
        None => Err(ScorecardError::InvalidInput(
            "No transcript given; pass a FILE, --text, or pipe it on standard input".to_string(),
        )),
    }
}

fn read_all<R: Read>(reader: &mut R) -> scorecard::Result<String> {
    let mut transcript = String::new();
    reader.read_to_string(&mut transcript).map_err(|e| {
        ScorecardError::InvalidInput(format!("Failed to read standard input: {}", e))
    })?;
    Ok(transcript)
}
