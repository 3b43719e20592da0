use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

/// CLI arguments for scorecard-server
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub config_file: Option<PathBuf>,
    pub max_request_size: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    /// Command definition, separate from parsing so it can be inspected in tests
    pub fn command() -> Command {
        Command::new("scorecard-server")
            .version(scorecard::VERSION)
            .author("Scorecard Contributors")
            .about("HTTP API server for rubric-based transcript scoring")
            .long_about(
                r#"Scorecard Server scores spoken introduction transcripts against a rubric
over a JSON API. Each criterion is evaluated by keyword presence, semantic
similarity and word count, and the response carries per-criterion feedback.

The server can be configured through command line arguments or environment
variables. Command line arguments take precedence over environment variables.

Examples:
  scorecard-server --port 8080
  scorecard-server --config scorecard.toml --log-level debug"#,
            )
            .arg(
                Arg::new("port")
                    .short('p')
                    .long("port")
                    .value_name("PORT")
                    .help("Port to listen on")
                    .long_help(
                        "Port number for the HTTP server to listen on.
Environment variables: SCORECARD_PORT, PORT",
                    )
                    .value_hint(ValueHint::Other)
                    .value_parser(clap::value_parser!(u16)),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file path")
                    .long_help(
                        "Path to a TOML, YAML or JSON configuration file with the rubric,
signal weights, embedding provider and logging settings.
Environment variable: SCORECARD_CONFIG_FILE",
                    )
                    .value_hint(ValueHint::FilePath)
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("max_request_size")
                    .long("max-request-size")
                    .value_name("BYTES")
                    .help("Maximum request body size in bytes")
                    .long_help(
                        "Maximum size allowed for HTTP request bodies.
Larger requests will be rejected.
Environment variable: SCORECARD_MAX_REQUEST_SIZE",
                    )
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("request_timeout")
                    .long("request-timeout")
                    .value_name("SECONDS")
                    .help("Scoring request timeout in seconds")
                    .long_help(
                        "How long a single scoring request may run before the server
answers with 504 Gateway Timeout.
Environment variable: SCORECARD_REQUEST_TIMEOUT_SECS",
                    )
                    .value_parser(clap::value_parser!(u64)),
            )
            .arg(
                Arg::new("log_level")
                    .long("log-level")
                    .value_name("LEVEL")
                    .help("Logging level")
                    .long_help(
                        "Set the logging level. Valid values: error, warn, info, debug, trace
Environment variable: RUST_LOG",
                    )
                    .value_parser(["error", "warn", "info", "debug", "trace"]),
            )
            .arg(
                Arg::new("help_env")
                    .long("help-env")
                    .help("Show all environment variables")
                    .action(ArgAction::SetTrue),
            )
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        if matches.get_flag("help_env") {
            Self::print_env_help();
            std::process::exit(0);
        }

        Self {
            port: matches.get_one::<u16>("port").copied(),
            config_file: matches.get_one::<PathBuf>("config").cloned(),
            max_request_size: matches.get_one::<usize>("max_request_size").copied(),
            request_timeout_secs: matches.get_one::<u64>("request_timeout").copied(),
            log_level: matches.get_one::<String>("log_level").cloned(),
        }
    }

    /// Print environment variable help
    fn print_env_help() {
        println!("Scorecard Server Environment Variables");
        println!("======================================");
        println!();
        println!("Server Configuration:");
        println!("  SCORECARD_PORT / PORT              - Server port (default: 5000)");
        println!("  SCORECARD_MAX_REQUEST_SIZE         - Max request body size in bytes (default: 2MB)");
        println!("  SCORECARD_REQUEST_TIMEOUT_SECS     - Scoring timeout in seconds (default: 30)");
        println!("  SCORECARD_CONFIG_FILE              - Path to the scorecard config file");
        println!();
        println!("Scoring:");
        println!("  SCORECARD_SCORING__SEMANTIC_WEIGHT - Semantic signal weight (default: 0.5)");
        println!("  SCORECARD_SCORING__KEYWORD_WEIGHT  - Keyword signal weight (default: 0.4)");
        println!("  SCORECARD_SCORING__LENGTH_WEIGHT   - Length signal weight (default: 0.1)");
        println!("  SCORECARD_RUBRIC__PATH             - Rubric file (default: builtin rubric)");
        println!();
        println!("Embeddings:");
        println!("  SCORECARD_EMBEDDING__PROVIDER      - hashing or remote (default: hashing)");
        println!("  SCORECARD_EMBEDDING__MODEL_NAME    - Model name sent to the service");
        println!("  SCORECARD_EMBEDDING__SERVICE_URL   - Base URL of the embedding service");
        println!("  SCORECARD_EMBEDDING_API_KEY        - Bearer token for the embedding service");
        println!("  SCORECARD_EMBEDDING__CACHE_DIR     - Directory for the persistent cache");
        println!();
        println!("Legacy variables:");
        println!("  SEMANTIC_WEIGHT, KEYWORD_WEIGHT, LENGTH_WEIGHT, RUBRIC_PATH, EMBED_MODEL_NAME");
        println!();
        println!("Logging:");
        println!(
            "  RUST_LOG                           - Logging level (error, warn, info, debug, trace)"
        );
        println!();
        println!("Note: Command line arguments take precedence over environment variables.");
    }
}
