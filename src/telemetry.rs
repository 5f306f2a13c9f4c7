//! Tracing setup for hosts embedding the registry.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a fmt subscriber. `RUST_LOG` takes precedence over `config.level`.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
