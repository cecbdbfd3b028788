//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging for binaries and integration tests.
///
/// Builds a registry with a human-readable fmt layer filtered by `RUST_LOG`.
/// Call once at process start; request-handling code only emits events.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::from_default_env());

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    Ok(())
}
