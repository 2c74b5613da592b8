//! In-memory sink.

use loghive_types::{Layout, LogEvent, Severity, Sink, SinkError};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::format::render;

/// Collects rendered lines in a shared buffer.
///
/// Clones share the buffer, so several nodes can each get their own labelled
/// copy while a test reads back the interleaved output in delivery order.
///
/// ```
/// use loghive_core::sinks::MemorySink;
/// use loghive_types::{Layout, LogEvent, LoggerName, Severity, Sink};
///
/// let out = MemorySink::new("capture").layout(Layout::Simple);
/// let tagged = out.clone().label("db");
///
/// let event = LogEvent::new(LoggerName::new("db").unwrap(), Severity::Warn, "slow query");
/// tagged.accept(&event).unwrap();
///
/// assert_eq!(out.lines(), vec!["[db] warn: slow query"]);
/// ```
#[derive(Debug, Clone)]
pub struct MemorySink {
    name: String,
    layout: Layout,
    label: Option<String>,
    level: Option<Severity>,
    buffer: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink using the simple layout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: Layout::Simple,
            label: None,
            level: None,
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the layout.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the sink-level minimum severity.
    pub fn min_level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    /// Snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().clone()
    }

    /// Drain the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.buffer.lock())
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Option<Severity> {
        self.level
    }

    fn accept(&self, event: &LogEvent) -> Result<(), SinkError> {
        let line = render(event, self.layout, self.label.as_deref(), false)?;
        self.buffer.lock().push(line);
        Ok(())
    }

    fn with_layout(&self, layout: Layout) -> Option<Arc<dyn Sink>> {
        Some(Arc::new(self.clone().layout(layout)))
    }
}
