//! Logger nodes and their registration input.

use loghive_types::{LoggerName, Severity, Sink};
use std::fmt;
use std::sync::Arc;

/// How a node came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOrigin {
    /// Added through `Registry::add`
    Registered,
    /// Created on the fly for an unknown name; never stored
    Synthesized,
}

/// A named logger: threshold, sinks, and propagate flag.
///
/// Nodes are immutable once published. Re-registering a name publishes a
/// fresh node; handles bound to the previous one keep using it.
#[derive(Clone)]
pub struct LoggerNode {
    name: LoggerName,
    level: Severity,
    sinks: Vec<Arc<dyn Sink>>,
    propagate: bool,
    origin: NodeOrigin,
}

impl LoggerNode {
    pub(crate) fn new(
        name: LoggerName,
        level: Severity,
        sinks: Vec<Arc<dyn Sink>>,
        propagate: bool,
        origin: NodeOrigin,
    ) -> Self {
        Self {
            name,
            level,
            sinks,
            propagate,
            origin,
        }
    }

    /// Logger name.
    pub fn name(&self) -> &LoggerName {
        &self.name
    }

    /// Minimum severity this node delivers.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Sinks in delivery order.
    pub fn sinks(&self) -> &[Arc<dyn Sink>] {
        &self.sinks
    }

    /// Whether events emitted here travel to ancestors.
    pub fn propagate(&self) -> bool {
        self.propagate
    }

    /// Whether the node was registered or synthesized.
    pub fn origin(&self) -> NodeOrigin {
        self.origin
    }

    /// Whether an event at `level` is delivered to this node's sinks.
    pub fn admits(&self, level: Severity) -> bool {
        level.passes(self.level)
    }
}

impl fmt::Debug for LoggerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerNode")
            .field("name", &self.name.as_str())
            .field("level", &self.level)
            .field("sinks", &self.sinks.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("propagate", &self.propagate)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Registration input for `Registry::add`.
///
/// Unset fields take the registry defaults. Omitting the sinks gives the node
/// a console sink labelled with its name; an explicit empty list keeps it
/// sink-less.
#[derive(Clone, Default)]
pub struct NodeConfig {
    pub(crate) level: Option<Severity>,
    pub(crate) sinks: Option<Vec<Arc<dyn Sink>>>,
    pub(crate) propagate: Option<bool>,
}

impl NodeConfig {
    /// Empty configuration; everything defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the threshold.
    pub fn level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    /// Append a sink.
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.get_or_insert_with(Vec::new).push(Arc::new(sink));
        self
    }

    /// Append an already shared sink.
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.get_or_insert_with(Vec::new).push(sink);
        self
    }

    /// Replace the sink list.
    pub fn sinks(mut self, sinks: Vec<Arc<dyn Sink>>) -> Self {
        self.sinks = Some(sinks);
        self
    }

    /// Set the propagate flag.
    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = Some(propagate);
        self
    }
}

impl fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfig")
            .field("level", &self.level)
            .field("sinks", &self.sinks.as_ref().map(|s| s.len()))
            .field("propagate", &self.propagate)
            .finish()
    }
}
