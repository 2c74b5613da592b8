//! Core trait definitions for loghive abstractions.

use std::fmt;
use std::sync::Arc;
use crate::errors::SinkError;
use crate::{Layout, LogEvent, Severity};

/// Consumer of accepted log events.
///
/// The registry decides *whether* a node sees an event; a sink decides what
/// to do with it. Sinks are shared between nodes, so implementations must be
/// safe to call from several threads.
pub trait Sink: Send + Sync + fmt::Debug {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &str;

    /// The sink's own minimum severity, if any.
    ///
    /// The dispatcher skips the sink for events that don't pass it.
    fn level(&self) -> Option<Severity> {
        None
    }

    /// Consume one event.
    fn accept(&self, event: &LogEvent) -> Result<(), SinkError>;

    /// A sibling sink writing to the same destination with another layout.
    ///
    /// Returns `None` when the sink has no notion of layout.
    fn with_layout(&self, _layout: Layout) -> Option<Arc<dyn Sink>> {
        None
    }
}
