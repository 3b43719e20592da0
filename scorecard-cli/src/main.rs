use clap::Parser;
use scorecard_cli::handlers::{
    handle_completions_command, handle_rubric_command, handle_score_command,
};
use scorecard_cli::{Cli, Commands, ScorecardCliContext, format_info, output_error};
use tracing::Level;

fn main() {
    let cli_args = Cli::parse();

    // Determine output format - env var overrides the cli arg
    let output_format = std::env::var("SCORECARD_OUTPUT").unwrap_or_else(|_| cli_args.output.clone());

    let is_quiet = cli_args.quiet
        || std::env::var("SCORECARD_QUIET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

    // JSON output keeps logging to errors only so stdout stays parseable
    let log_level = if is_quiet || output_format == "json" {
        Level::ERROR
    } else if cli_args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli_args, &output_format) {
        output_error(&e, &output_format);
        std::process::exit(1);
    }
}

fn run(cli_args: Cli, output_format: &str) -> scorecard::Result<()> {
    match cli_args.command {
        Commands::Version => {
            println!("{}", format_info(&format!("Scorecard CLI v{}", scorecard::VERSION)));
        }

        Commands::Completions(args) => {
            handle_completions_command(args, &mut std::io::stdout());
        }

        Commands::Score(args) => {
            let ctx = ScorecardCliContext::new(cli_args.config.as_deref())?;
            handle_score_command(args, ctx, output_format)?;
        }

        Commands::Rubric(args) => {
            let ctx = ScorecardCliContext::new(cli_args.config.as_deref())?;
            handle_rubric_command(args, ctx, output_format)?;
        }
    }

    Ok(())
}
