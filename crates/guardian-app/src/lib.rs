//! Shared startup code for the ClimateGuardian binaries.

pub mod cli;

use guardian_core::GuardianConfig;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Handle for swapping the active log filter once the config is known.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Switch to the configured level unless `RUST_LOG` is set.
    pub fn apply_config(&self, config: &GuardianConfig) {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        self.set_level(config.effective_log_level());
    }

    fn set_level(&self, directive: &str) {
        match EnvFilter::try_new(directive) {
            Ok(filter) => {
                if let Err(e) = self.handle.reload(filter) {
                    tracing::warn!(error = %e, "Failed to update log filter");
                }
            }
            Err(e) => {
                tracing::warn!(%directive, error = %e, "Invalid log level, keeping current filter");
            }
        }
    }
}

/// Build the fmt subscriber with a reloadable filter.
pub fn build_subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
) -> (impl tracing::Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer));
    (subscriber, LogHandle { handle })
}

/// Install the global subscriber.
///
/// Runs before the config is read so that config warnings are visible. The
/// filter starts from `RUST_LOG` (default `info`); call
/// [`LogHandle::apply_config`] once the config is resolved.
pub fn init_tracing() -> LogHandle {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (subscriber, handle) = build_subscriber(filter, std::io::stdout);
    subscriber.init();
    handle
}

/// Load the config file, then layer environment variables and CLI flags on top.
pub fn resolve_config(args: &cli::CliArgs) -> GuardianConfig {
    let path = args.resolve_config_path();
    let mut config = GuardianConfig::load_or_default(&path);
    config.apply_env_overrides();
    args.apply_to(&mut config);
    config
}
