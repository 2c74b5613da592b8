//! A sink that drops everything.

use loghive_types::{LogEvent, Sink, SinkError};

/// Accepts every event and discards it.
///
/// Synthesized nodes carry one of these so they stay observable in
/// diagnostics without producing output.
#[derive(Debug, Clone)]
pub struct SilentSink {
    name: String,
}

impl SilentSink {
    /// Create a silent sink.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for SilentSink {
    fn default() -> Self {
        Self::new("silent")
    }
}

impl Sink for SilentSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, _event: &LogEvent) -> Result<(), SinkError> {
        Ok(())
    }
}
