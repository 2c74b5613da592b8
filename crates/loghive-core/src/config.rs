//! Configuration file loading.
//!
//! Log manager configuration is read from YAML into [`ConfigFile`] and then
//! layered with environment overrides:
//!
//! 1. Environment variables (`LOGHIVE_LEVEL`, `LOGHIVE_PROPAGATE`)
//! 2. Values loaded from file
//! 3. Registry defaults
//!
//! ## Example
//!
//! ```rust
//! use loghive_core::config;
//!
//! let file = config::parse_yaml(r#"
//! transports:
//!   console: { type: console, layout: simple }
//! loggers:
//!   app: { level: debug, transportNames: [console] }
//! "#)?;
//! assert_eq!(file.loggers.as_ref().map(|l| l.len()), Some(1));
//! # Ok::<(), loghive_types::LogError>(())
//! ```

use loghive_types::config::{ConfigFile, SinkSpec};
use loghive_types::{LogError, Result, Sink};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::registry::RegistryOptions;
use crate::sinks::{ConsoleSink, FileSink, SilentSink};

/// Environment variable overriding the default threshold.
pub const ENV_LEVEL: &str = "LOGHIVE_LEVEL";

/// Environment variable overriding the default propagate flag.
pub const ENV_PROPAGATE: &str = "LOGHIVE_PROPAGATE";

/// Parse a YAML document.
///
/// An empty or `null` document means no configuration was supplied.
pub fn parse_yaml(content: &str) -> Result<ConfigFile> {
    let value: Value = serde_yaml::from_str(content)?;
    match value {
        Value::Null => Err(LogError::ConfigRequired),
        Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        other => Err(LogError::InvalidConfig(format!(
            "expected a mapping at the top level, found {}",
            kind(&other)
        ))),
    }
}

/// Read and parse a YAML configuration file.
pub fn load_file(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("Loaded log configuration from {:?}", path);
    parse_yaml(&content)
}

/// Apply overrides from the process environment.
pub fn apply_env(config: &mut ConfigFile) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source.
pub fn apply_overrides<F>(config: &mut ConfigFile, var: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = var(ENV_LEVEL) {
        config.level = Some(level.parse()?);
    }
    if let Some(propagate) = var(ENV_PROPAGATE) {
        config.propagate = Some(parse_bool(&propagate).ok_or_else(|| {
            LogError::InvalidConfig(format!("{}: expected a boolean, got '{}'", ENV_PROPAGATE, propagate))
        })?);
    }
    Ok(())
}

/// Registry options described by a config file.
pub fn registry_options(config: &ConfigFile) -> RegistryOptions {
    let mut options = RegistryOptions::default();
    if let Some(level) = config.level {
        options = options.with_level(level);
    }
    if let Some(propagate) = config.propagate {
        options = options.with_propagate(propagate);
    }
    if let Some(walk) = config.walk {
        options = options.with_walk(walk);
    }
    options
}

/// Instantiate a declared transport.
///
/// Console and file sinks without an explicit label are labelled with the
/// transport name.
pub fn build_sink(name: &str, spec: &SinkSpec) -> Result<Arc<dyn Sink>> {
    let sink: Arc<dyn Sink> = match spec {
        SinkSpec::Console { stream, layout, label, level, colors } => {
            let mut sink = ConsoleSink::new(name)
                .stream(*stream)
                .layout(*layout)
                .label(label.as_deref().unwrap_or(name));
            if let Some(level) = level {
                sink = sink.min_level(*level);
            }
            if let Some(colors) = colors {
                sink = sink.colors(*colors);
            }
            Arc::new(sink)
        }
        SinkSpec::File { path, layout, label, level } => {
            let mut sink = FileSink::open(name, path)?
                .layout(*layout)
                .label(label.as_deref().unwrap_or(name));
            if let Some(level) = level {
                sink = sink.min_level(*level);
            }
            Arc::new(sink)
        }
        SinkSpec::Silent => Arc::new(SilentSink::new(name)),
    };
    Ok(sink)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
