//! Structured logging setup using the `tracing` ecosystem.
//!
//! The content store crates are libraries used from tests, so only a
//! console subscriber is provided. Initialization is idempotent: the first
//! caller wins and later calls are no-ops, which lets every test call it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a console-only tracing subscriber at the given level.
///
/// `level` accepts anything `EnvFilter` does ("debug", "cs_fake=trace", ...).
/// Unparseable levels fall back to "info".
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()
        .is_ok()
    {
        tracing::debug!("console logging initialized at level={level}");
    }
}
