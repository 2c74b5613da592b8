//! The logger registry.
//!
//! The registry owns the name → node mapping and is its only mutator. Nodes
//! are published whole behind an `Arc`, so a concurrent lookup sees either
//! the previous node or the new one, never a partial configuration.
//!
//! ## Example
//!
//! ```rust
//! use loghive_core::{Lookup, NodeConfig, Registry};
//! use loghive_types::LogError;
//!
//! let registry = Registry::new();
//! assert!(matches!(registry.lookup("anything"), Err(LogError::RootNotInitialized)));
//!
//! registry.add("root", NodeConfig::new().sinks(vec![]))?;
//! assert!(matches!(registry.lookup("root")?, Lookup::Found(_)));
//! assert!(matches!(registry.lookup("app.db")?, Lookup::Synthesized(_)));
//! # Ok::<(), LogError>(())
//! ```

use loghive_types::{LogError, LoggerName, Result, Severity, Sink, WalkPolicy, ROOT};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::chain::resolve_chain;
use crate::logger::Logger;
use crate::node::{LoggerNode, NodeConfig, NodeOrigin};
use crate::sinks::{default_sink, SilentSink};

/// Registry-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Threshold for nodes that don't set one
    pub level: Severity,
    /// Propagate flag for nodes that don't set one
    pub propagate: bool,
    /// Whether ancestor flags can truncate a walk
    pub walk: WalkPolicy,
}

impl RegistryOptions {
    /// Set the default threshold.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Set the default propagate flag.
    pub fn with_propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    /// Set the walk policy.
    pub fn with_walk(mut self, walk: WalkPolicy) -> Self {
        self.walk = walk;
        self
    }
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            propagate: true,
            walk: WalkPolicy::Chain,
        }
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone)]
pub enum Lookup {
    /// The name is registered
    Found(Arc<LoggerNode>),
    /// The name is unknown; a transient silent node stands in for it
    Synthesized(Arc<LoggerNode>),
}

impl Lookup {
    /// The resolved node.
    pub fn node(&self) -> &Arc<LoggerNode> {
        match self {
            Lookup::Found(node) | Lookup::Synthesized(node) => node,
        }
    }

    /// Take the resolved node.
    pub fn into_node(self) -> Arc<LoggerNode> {
        match self {
            Lookup::Found(node) | Lookup::Synthesized(node) => node,
        }
    }

    /// Whether the node was synthesized.
    pub fn is_synthesized(&self) -> bool {
        matches!(self, Lookup::Synthesized(_))
    }
}

struct Shared {
    options: RegistryOptions,
    nodes: RwLock<HashMap<LoggerName, Arc<LoggerNode>>>,
    // Registered names only. Filled while holding the `nodes` read lock,
    // cleared while holding its write lock.
    chains: RwLock<HashMap<LoggerName, Arc<[LoggerName]>>>,
}

/// Name → node registry.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Clone)]
pub struct Registry {
    shared: Arc<Shared>,
}

impl Registry {
    /// Registry with default options.
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// Registry with explicit defaults.
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                options,
                nodes: RwLock::new(HashMap::new()),
                chains: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Registry-wide defaults.
    pub fn options(&self) -> RegistryOptions {
        self.shared.options
    }

    /// Create or replace the node for `name`.
    ///
    /// Unset fields take the registry defaults. Replacing is total: nothing
    /// of the previous configuration survives.
    ///
    /// # Errors
    ///
    /// Fails only when `name` is not a valid logger name.
    pub fn add(&self, name: impl AsRef<str>, config: NodeConfig) -> Result<Arc<LoggerNode>> {
        let name = LoggerName::new(name)?;
        let options = self.shared.options;

        let sinks = config.sinks.unwrap_or_else(|| vec![default_sink(&name)]);
        let node = Arc::new(LoggerNode::new(
            name.clone(),
            config.level.unwrap_or(options.level),
            sinks,
            config.propagate.unwrap_or(options.propagate),
            NodeOrigin::Registered,
        ));

        let mut nodes = self.shared.nodes.write();
        let replaced = nodes.insert(name.clone(), Arc::clone(&node)).is_some();
        self.shared.chains.write().clear();
        drop(nodes);

        debug!(
            "{} logger {} (level={}, sinks={}, propagate={})",
            if replaced { "Replaced" } else { "Registered" },
            name,
            node.level(),
            node.sinks().len(),
            node.propagate()
        );

        Ok(node)
    }

    /// Resolve `name` to a node.
    ///
    /// Unknown names resolve to a fresh synthesized node (silent sink,
    /// default threshold and propagate flag) that is not stored.
    ///
    /// # Errors
    ///
    /// `RootNotInitialized` when `name` is unknown and no root is registered;
    /// `InvalidName` when `name` is malformed.
    pub fn lookup(&self, name: impl AsRef<str>) -> Result<Lookup> {
        let name = LoggerName::new(name)?;
        let nodes = self.shared.nodes.read();

        if let Some(node) = nodes.get(&name) {
            return Ok(Lookup::Found(Arc::clone(node)));
        }
        if !nodes.contains_key(ROOT) {
            return Err(LogError::RootNotInitialized);
        }
        drop(nodes);

        trace!("Synthesizing logger {}", name);
        let options = self.shared.options;
        let silent: Arc<dyn Sink> = Arc::new(SilentSink::default());
        Ok(Lookup::Synthesized(Arc::new(LoggerNode::new(
            name,
            options.level,
            vec![silent],
            options.propagate,
            NodeOrigin::Synthesized,
        ))))
    }

    /// Logger handle for `name`; see [`Registry::lookup`].
    pub fn get(&self, name: impl AsRef<str>) -> Result<Logger> {
        let node = self.lookup(name)?.into_node();
        Ok(Logger::new(self.clone(), node))
    }

    /// Registered node for `name`, if any.
    pub fn node(&self, name: &str) -> Option<Arc<LoggerNode>> {
        self.shared.nodes.read().get(name).cloned()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.shared.nodes.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<LoggerName> {
        let mut names: Vec<LoggerName> = self.shared.nodes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.shared.nodes.read().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.shared.nodes.read().is_empty()
    }

    /// Ancestor chain for `name` against the current name set.
    pub fn chain(&self, name: impl AsRef<str>) -> Result<Vec<LoggerName>> {
        let name = LoggerName::new(name)?;
        let nodes = self.shared.nodes.read();
        Ok(self.cached_chain(&nodes, &name).to_vec())
    }

    /// Snapshot of the ancestor nodes of `name`, in chain order.
    ///
    /// The read lock is released before returning, so callers may run sinks
    /// without blocking `add`.
    pub(crate) fn ancestors(&self, name: &LoggerName) -> Vec<Arc<LoggerNode>> {
        let nodes = self.shared.nodes.read();
        self.cached_chain(&nodes, name)
            .iter()
            .filter_map(|ancestor| nodes.get(ancestor).cloned())
            .collect()
    }

    fn cached_chain(
        &self,
        nodes: &HashMap<LoggerName, Arc<LoggerNode>>,
        name: &LoggerName,
    ) -> Arc<[LoggerName]> {
        if !nodes.contains_key(name) {
            return resolve_chain(name.as_str(), nodes.keys()).into();
        }
        if let Some(chain) = self.shared.chains.read().get(name) {
            return Arc::clone(chain);
        }
        let chain: Arc<[LoggerName]> = resolve_chain(name.as_str(), nodes.keys()).into();
        self.shared.chains.write().insert(name.clone(), Arc::clone(&chain));
        chain
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("options", &self.shared.options)
            .field("names", &self.names())
            .finish()
    }
}
