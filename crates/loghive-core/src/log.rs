//! Diagnostics for loghive itself.
//!
//! The registry reports its own activity (registrations, sink failures,
//! unknown transport references) through `tracing`. These helpers install a
//! subscriber for applications that don't already have one.

use loghive_types::{LogError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "loghive_core=warn";

/// Initialize diagnostics with the default filter.
pub fn init_default() -> Result<()> {
    init_with_filter(EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize diagnostics from `RUST_LOG`, falling back to `fallback`.
pub fn init_from_env(fallback: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    init_with_filter(filter)
}

fn init_with_filter(filter: EnvFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| LogError::SubscriberInstalled(e.to_string()))
}
