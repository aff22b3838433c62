use thiserror::Error;

/// Top-level error type for ClimateGuardian.
///
/// Crates further up the stack either wrap this type (the API maps it onto
/// HTTP status codes) or absorb it (the assistant degrades a failed query
/// into an `error` intent result).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GuardianError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Dataset lookup failed: {0}")]
    Dataset(String),

    #[error("History error: {0}")]
    History(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Initialization error: {0}")]
    Initialization(String),
}

impl From<toml::de::Error> for GuardianError {
    fn from(err: toml::de::Error) -> Self {
        GuardianError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GuardianError {
    fn from(err: toml::ser::Error) -> Self {
        GuardianError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for GuardianError {
    fn from(err: serde_json::Error) -> Self {
        GuardianError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for ClimateGuardian operations.
pub type Result<T> = std::result::Result<T, GuardianError>;
