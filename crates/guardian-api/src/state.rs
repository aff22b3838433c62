//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use guardian_assistant::{ClimateGuardian, HistoryLog};
use guardian_core::GuardianConfig;

/// Shared application state, passed to handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub guardian: Arc<ClimateGuardian>,
    pub config: Arc<GuardianConfig>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: GuardianConfig, guardian: ClimateGuardian) -> Self {
        Self {
            guardian: Arc::new(guardian),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// State over the built-in mock dataset and a fresh history log.
    pub fn builtin(config: GuardianConfig) -> Self {
        Self::new(config, ClimateGuardian::builtin(Arc::new(HistoryLog::new())))
    }

    pub fn history(&self) -> &Arc<HistoryLog> {
        self.guardian.history()
    }
}
