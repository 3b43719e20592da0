use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use scorecard::config::{ConfigLoader, ScorecardConfig};
use scorecard::scorer::TranscriptScorer;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use scorecard_server::cli::CliArgs;
use scorecard_server::config::ServerConfig;
use scorecard_server::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli_args = CliArgs::parse();

    // Set up logging
    let filter = match &cli_args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Scorecard server v{}", scorecard::VERSION);

    let server_config = ServerConfig::from_cli_and_env(cli_args)?;
    info!("Server configuration loaded");

    let scorecard_config = load_scorecard_config(&server_config)?;

    // Building the provider may construct a blocking HTTP client and embed the
    // rubric descriptions, neither of which may run on the async runtime
    let scorer =
        tokio::task::spawn_blocking(move || TranscriptScorer::from_config(&scorecard_config))
            .await??;
    info!(
        rubric = %scorer.rubric().source,
        criteria = scorer.rubric().len(),
        provider = %scorer.provider_name(),
        "Scorer initialized"
    );

    let app_state = Arc::new(AppState::new(scorer, server_config.clone()));
    let app = create_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);
    info!("API documentation available at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Merge the default files, the configured file and the environment
fn load_scorecard_config(server_config: &ServerConfig) -> Result<ScorecardConfig> {
    let mut loader = ConfigLoader::new();
    loader.load_default_files();

    match &server_config.config_file_path {
        Some(config_file) => {
            info!("Loading scorecard configuration from: {}", config_file.display());
            if let Err(e) = loader.load_file(config_file) {
                warn!(
                    "Failed to load config file {}: {}. Using defaults.",
                    config_file.display(),
                    e
                );
            }
        }
        None => info!("No config file provided, using default configuration"),
    }

    let config = loader.load_env().load_legacy_env().extract()?;
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
