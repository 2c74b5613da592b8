//! Declarative multi-transport configuration.
//!
//! A [`LogManager`] takes named transports and named loggers referencing
//! them, registers everything into a fresh [`Registry`], and hands out
//! loggers. A silent root is added when the configuration doesn't declare
//! one, so lookups of unknown names always succeed.

use indexmap::IndexMap;
use loghive_types::config::{ConfigFile, LoggerSpec, TransportRef};
use loghive_types::{bail, LogError, Result, Sink, ROOT};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config;
use crate::logger::Logger;
use crate::node::NodeConfig;
use crate::registry::{Registry, RegistryOptions};
use crate::sinks::SilentSink;

/// Programmatic log manager configuration.
///
/// `transports` and `loggers` are both required; they are optional here so
/// that their absence is reported as `InvalidConfig`.
#[derive(Clone, Default)]
pub struct ManagerConfig {
    /// Named transports
    pub transports: Option<IndexMap<String, Arc<dyn Sink>>>,
    /// Named loggers
    pub loggers: Option<IndexMap<String, LoggerSpec>>,
    /// Registry defaults
    pub options: RegistryOptions,
}

impl ManagerConfig {
    /// Configuration with empty transport and logger maps.
    pub fn new() -> Self {
        Self {
            transports: Some(IndexMap::new()),
            loggers: Some(IndexMap::new()),
            options: RegistryOptions::default(),
        }
    }

    /// Declare a transport.
    pub fn transport(mut self, name: impl Into<String>, sink: impl Sink + 'static) -> Self {
        self.transports
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), Arc::new(sink));
        self
    }

    /// Declare a logger.
    pub fn logger(mut self, name: impl Into<String>, spec: LoggerSpec) -> Self {
        self.loggers
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), spec);
        self
    }

    /// Set registry defaults.
    pub fn options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for ManagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerConfig")
            .field("transports", &self.transports.as_ref().map(|t| t.keys().collect::<Vec<_>>()))
            .field("loggers", &self.loggers)
            .field("options", &self.options)
            .finish()
    }
}

/// Registry built from a declarative configuration.
pub struct LogManager {
    registry: Registry,
    transports: IndexMap<String, Arc<dyn Sink>>,
}

impl LogManager {
    /// Build from a programmatic configuration.
    ///
    /// # Errors
    ///
    /// `ConfigRequired` when `config` is `None`; `InvalidConfig` when
    /// `transports` or `loggers` is missing, or a logger lists transports
    /// both by name and by reference; `InvalidName` for malformed logger
    /// names.
    pub fn new(config: Option<ManagerConfig>) -> Result<Self> {
        let Some(config) = config else {
            bail!(ConfigRequired);
        };
        let Some(transports) = config.transports else {
            bail!(InvalidConfig, "missing 'transports'");
        };
        let Some(loggers) = config.loggers else {
            bail!(InvalidConfig, "missing 'loggers'");
        };

        let registry = Registry::with_options(config.options);

        if !loggers.contains_key(ROOT) {
            debug!("No root logger configured, adding a silent one");
            registry.add(ROOT, NodeConfig::new().sink(SilentSink::new(ROOT)))?;
        }

        for (name, spec) in &loggers {
            let sinks = resolve_transports(name, spec, &transports)?;
            let mut node = NodeConfig::new().sinks(sinks);
            if let Some(level) = spec.level {
                node = node.level(level);
            }
            if let Some(propagate) = spec.propagate {
                node = node.propagate(propagate);
            }
            registry.add(name, node)?;
        }

        Ok(Self { registry, transports })
    }

    /// Build from a parsed configuration file, instantiating its transports.
    pub fn from_config_file(file: ConfigFile) -> Result<Self> {
        let options = config::registry_options(&file);
        let Some(specs) = file.transports else {
            bail!(InvalidConfig, "missing 'transports'");
        };
        if file.loggers.is_none() {
            bail!(InvalidConfig, "missing 'loggers'");
        }

        let mut transports = IndexMap::with_capacity(specs.len());
        for (name, spec) in &specs {
            transports.insert(name.clone(), config::build_sink(name, spec)?);
        }

        Self::new(Some(ManagerConfig {
            transports: Some(transports),
            loggers: file.loggers,
            options,
        }))
    }

    /// Load a YAML file, apply environment overrides, and build.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = config::load_file(path)?;
        config::apply_env(&mut file)?;
        Self::from_config_file(file)
    }

    /// Logger for `name`.
    pub fn get(&self, name: impl AsRef<str>) -> Result<Logger> {
        self.registry.get(name)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A declared transport.
    pub fn transport(&self, name: &str) -> Option<&Arc<dyn Sink>> {
        self.transports.get(name)
    }
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("registry", &self.registry)
            .field("transports", &self.transports.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn resolve_transports(
    logger: &str,
    spec: &LoggerSpec,
    transports: &IndexMap<String, Arc<dyn Sink>>,
) -> Result<Vec<Arc<dyn Sink>>> {
    let refs: Vec<TransportRef> = match (&spec.transport_names, &spec.transports) {
        (Some(_), Some(_)) => {
            return Err(LogError::InvalidConfig(format!(
                "logger '{}' sets both 'transportNames' and 'transports'",
                logger
            )))
        }
        (Some(names), None) => names.iter().map(TransportRef::named).collect(),
        (None, Some(refs)) => refs.clone(),
        (None, None) => Vec::new(),
    };

    let mut sinks = Vec::with_capacity(refs.len());
    for reference in refs {
        let Some(sink) = transports.get(&reference.name) else {
            warn!("Logger '{}' references unknown transport '{}'", logger, reference.name);
            continue;
        };
        let sink = match reference.format {
            Some(layout) => sink.with_layout(layout).unwrap_or_else(|| {
                warn!(
                    "Transport '{}' does not support layouts; ignoring '{}' override for '{}'",
                    reference.name, layout, logger
                );
                Arc::clone(sink)
            }),
            None => Arc::clone(sink),
        };
        sinks.push(sink);
    }
    Ok(sinks)
}
