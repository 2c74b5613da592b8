//! CLI command implementations.

pub mod chain;
pub mod check;
pub mod emit;

use anyhow::{Context, Result};
use loghive_core::LogManager;
use std::path::Path;

/// Build a manager from the config file, with context on failure.
pub(crate) fn load_manager(config: &Path) -> Result<LogManager> {
    LogManager::from_path(config)
        .with_context(|| format!("Failed to load logging configuration from {:?}", config))
}
