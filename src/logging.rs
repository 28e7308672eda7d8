//! Tracing subscriber setup for binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{GraphError, Result};

/// Installs a global tracing subscriber with the given filter directive
/// (e.g. `"info"` or `"wayline=debug"`).
///
/// # Errors
/// Returns [`GraphError::InvalidArgument`] if the directive does not
/// parse or a subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_new(level)
                .map_err(|e| GraphError::InvalidArgument(format!("invalid log level: {e}")))?,
        )
        .with_target(true)
        .try_init()
        .map_err(|_| GraphError::InvalidArgument("logging already initialized".into()))
}
