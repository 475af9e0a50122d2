use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::app_config::{LogFormat, LogLevel};
use crate::core::errors::{AuditError, Result};

/// Initialize structured logging to stderr.
///
/// - `LogFormat::Json`: flattened JSON, one object per line.
/// - `LogFormat::Text`: compact human-readable output.
///
/// `RUST_LOG` wins over `level` when set. Call once at startup.
pub fn init_logging(level: LogLevel, format: LogFormat) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| AuditError::InvalidConfig {
        detail: format!("Failed to initialize logging: {e}"),
    })
}
