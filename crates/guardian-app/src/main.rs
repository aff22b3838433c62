//! ClimateGuardian server binary - composition root.
//!
//! 1. Install tracing
//! 2. Resolve configuration (file, environment, CLI flags)
//! 3. Build the assistant over the built-in mock dataset
//! 4. Serve the HTTP API until Ctrl-C

use std::sync::Arc;

use clap::Parser;

use guardian_api::{start_server, AppState};
use guardian_app::cli::CliArgs;
use guardian_app::{init_tracing, resolve_config};
use guardian_assistant::{ClimateGuardian, HistoryLog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let logs = init_tracing();
    let config = resolve_config(&args);
    logs.apply_config(&config);

    tracing::info!("Starting ClimateGuardian v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        path = %args.resolve_config_path().display(),
        debug = config.general.debug,
        "Configuration resolved"
    );

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "watsonx.ai credentials not configured; answering from the built-in mock dataset"
        );
    }

    let history = Arc::new(HistoryLog::new());
    let guardian = ClimateGuardian::builtin(history);
    let state = AppState::new(config, guardian);

    start_server(state).await?;
    Ok(())
}
