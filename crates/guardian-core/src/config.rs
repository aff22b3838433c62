use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GuardianError, Result};

/// Environment variables that must be set for a production deployment.
pub const REQUIRED_CREDENTIAL_VARS: [&str; 2] = ["WATSONX_API_KEY", "WATSONX_PROJECT_ID"];

/// Top-level configuration for ClimateGuardian.
///
/// Loaded from `guardian.toml` by default, then overridden by environment
/// variables and finally by CLI flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardianConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub watsonx: WatsonxConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl GuardianConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GuardianConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| GuardianError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` as the variable source.
    ///
    /// `PORT` is ignored when it does not parse as a port number.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.general.port = port,
                Err(_) => warn!(value = %raw, "Ignoring invalid PORT value"),
            }
        }
        if let Some(raw) = lookup("GUARDIAN_DEBUG").or_else(|| lookup("FLASK_DEBUG")) {
            self.general.debug = raw.trim().eq_ignore_ascii_case("true");
        }
        if let Some(key) = non_empty(lookup("WATSONX_API_KEY")) {
            self.watsonx.api_key = Some(key);
        }
        if let Some(project) = non_empty(lookup("WATSONX_PROJECT_ID")) {
            self.watsonx.project_id = Some(project);
        }
        if let Some(key) = non_empty(lookup("IBM_CLOUD_API_KEY")) {
            self.watsonx.ibm_cloud_api_key = Some(key);
        }
    }

    /// Names of required credential variables that have no value.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.watsonx.api_key.is_none() {
            missing.push(REQUIRED_CREDENTIAL_VARS[0]);
        }
        if self.watsonx.project_id.is_none() {
            missing.push(REQUIRED_CREDENTIAL_VARS[1]);
        }
        missing
    }

    /// Effective tracing filter directive: `debug` when the debug flag is on.
    pub fn effective_log_level(&self) -> &str {
        if self.general.debug {
            "debug"
        } else {
            &self.general.log_level
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// HTTP listener and process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Interface the HTTP listener binds to.
    pub host: String,
    pub port: u16,
    /// Debug mode: verbose logging.
    pub debug: bool,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Output directory for the dataset initializer.
    pub data_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 12000,
            debug: false,
            log_level: "info".to_string(),
            data_dir: "data".to_string(),
        }
    }
}

/// IBM watsonx / IBM Cloud credentials.
///
/// Read and reported at startup; no inference call is ever made with them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WatsonxConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub ibm_cloud_api_key: Option<String>,
}

/// Query history exposure settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of most recent records returned by the history endpoint.
    pub page_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}
