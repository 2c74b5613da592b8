//! Concrete sinks.
//!
//! - [`ConsoleSink`]: stdout or stderr, colored when attached to a terminal
//! - [`FileSink`]: appends to a file shared between relayouts
//! - [`MemorySink`]: collects rendered lines, mainly for tests and tooling
//! - [`SilentSink`]: accepts and drops everything

pub mod console;
pub mod file;
pub mod memory;
pub mod silent;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use silent::SilentSink;

use loghive_types::{Layout, LoggerName, Sink};
use std::sync::Arc;

/// Sink given to nodes registered without any sink configuration.
pub fn default_sink(name: &LoggerName) -> Arc<dyn Sink> {
    Arc::new(
        ConsoleSink::new(name.as_str())
            .layout(Layout::Pretty)
            .label(name.as_str()),
    )
}
