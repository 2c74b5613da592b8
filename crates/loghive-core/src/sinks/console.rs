//! Console sink.

use loghive_types::{Layout, LogEvent, Severity, Sink, SinkError, Stream};
use std::io::{self, Write};
use std::sync::Arc;

use crate::format::render;
use crate::term::is_terminal;

/// Writes one line per event to stdout or stderr.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    name: String,
    stream: Stream,
    layout: Layout,
    label: Option<String>,
    level: Option<Severity>,
    colors: Option<bool>,
}

impl ConsoleSink {
    /// Stdout sink with the pretty layout and no label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stream: Stream::Stdout,
            layout: Layout::Pretty,
            label: None,
            level: None,
            colors: None,
        }
    }

    /// Select the output stream.
    pub fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
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

    /// Force colors on or off instead of detecting a terminal.
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    fn use_colors(&self) -> bool {
        self.colors.unwrap_or_else(|| is_terminal(self.stream))
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Option<Severity> {
        self.level
    }

    fn accept(&self, event: &LogEvent) -> Result<(), SinkError> {
        let mut line = render(event, self.layout, self.label.as_deref(), self.use_colors())?;
        line.push('\n');
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Stream::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn with_layout(&self, layout: Layout) -> Option<Arc<dyn Sink>> {
        Some(Arc::new(self.clone().layout(layout)))
    }
}
