//! Dataset initialization binary.
//!
//! Writes metadata and sample files for every catalog dataset into the data
//! directory and exits non-zero if any dataset failed.

use std::process::ExitCode;

use clap::Parser;

use guardian_app::cli::CliArgs;
use guardian_app::{init_tracing, resolve_config};
use guardian_core::DatasetInitializer;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let logs = init_tracing();
    let config = resolve_config(&args);
    logs.apply_config(&config);

    tracing::info!(data_dir = %config.general.data_dir, "ClimateGuardian data initialization");

    let initializer = match DatasetInitializer::new(&config.general.data_dir) {
        Ok(init) => init,
        Err(e) => {
            tracing::error!(error = %e, "Failed to prepare data directory");
            return ExitCode::FAILURE;
        }
    };

    if !initializer.validate_environment(&config) {
        tracing::warn!("Continuing with mock data only");
    }

    let results = match initializer.initialize_all() {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(error = %e, "Initialization failed");
            return ExitCode::FAILURE;
        }
    };

    let failed: Vec<&str> = results
        .iter()
        .filter(|(_, ok)| !**ok)
        .map(|(id, _)| id.as_str())
        .collect();
    if failed.is_empty() {
        tracing::info!(total = results.len(), "All datasets initialized");
        ExitCode::SUCCESS
    } else {
        tracing::error!(failed = %failed.join(", "), "Some datasets failed to initialize");
        ExitCode::FAILURE
    }
}
