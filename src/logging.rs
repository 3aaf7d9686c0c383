//! Logging setup
//!
//! Structured logging through `tracing`, written to stderr so that object IDs
//! printed on stdout stay machine readable. The filter is read from `BIT_LOG`
//! using `EnvFilter` directive syntax and defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BIT_LOG";

const DEFAULT_LEVEL: &str = "warn";

pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Unable to initialize logging: {e}"))
}
