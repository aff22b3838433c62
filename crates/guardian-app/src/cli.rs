//! CLI argument definitions for the ClimateGuardian binaries.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::Parser;
use guardian_core::GuardianConfig;

/// Config file used when neither `--config` nor `GUARDIAN_CONFIG` is given.
pub const DEFAULT_CONFIG_FILE: &str = "guardian.toml";

/// ClimateGuardian: climate risk, policy and funding question answering.
#[derive(Parser, Debug, Default)]
#[command(name = "climate-guardian", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Address to bind the API server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Directory for dataset metadata and samples.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Enable debug mode (debug-level logging).
    #[arg(long = "debug")]
    pub debug: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > GUARDIAN_CONFIG env var > ./guardian.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_from(std::env::var("GUARDIAN_CONFIG").ok())
    }

    fn resolve_config_path_from(&self, env_value: Option<String>) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        match env_value {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Overwrite config values with any flags given on the command line.
    pub fn apply_to(&self, config: &mut GuardianConfig) {
        if let Some(ref host) = self.host {
            config.general.host = host.clone();
        }
        if let Some(port) = self.port {
            config.general.port = port;
        }
        if let Some(ref dir) = self.data_dir {
            config.general.data_dir = dir.to_string_lossy().to_string();
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
        if self.debug {
            config.general.debug = true;
        }
    }
}
