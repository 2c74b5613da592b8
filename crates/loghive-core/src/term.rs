//! Terminal utilities for colored output.

use colored::{Color, Colorize};
use loghive_types::{Severity, Stream};
use std::io::{self, IsTerminal};

/// Check if the given console stream is attached to a terminal.
pub fn is_terminal(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => io::stdout().is_terminal(),
        Stream::Stderr => io::stderr().is_terminal(),
    }
}

/// Color conventionally associated with a level.
pub fn level_color(level: Severity) -> Color {
    match level {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info | Severity::Http => Color::Green,
        Severity::Verbose => Color::Cyan,
        Severity::Debug => Color::Blue,
        Severity::Silly => Color::Magenta,
    }
}

/// Level name, colored when `colors` is set.
pub fn paint_level(level: Severity, colors: bool) -> String {
    if colors {
        level.as_str().color(level_color(level)).to_string()
    } else {
        level.as_str().to_string()
    }
}
