//! Rendering events into lines.
//!
//! Every layout produces a single line without a trailing newline; sinks add
//! the terminator when they write.

use chrono::SecondsFormat;
use loghive_types::{Layout, LogEvent, SinkError};
use serde_json::Value;
use std::fmt::Write;

use crate::term::paint_level;

/// Render an event with the given layout.
///
/// `label` is the bracketed tag shown by the pretty and simple layouts and
/// the `label` key of the JSON layout; it is omitted when `None`.
pub fn render(
    event: &LogEvent,
    layout: Layout,
    label: Option<&str>,
    colors: bool,
) -> Result<String, SinkError> {
    let level = paint_level(event.level, colors && layout != Layout::Json);
    let mut line = String::with_capacity(event.message.len() + 48);

    match layout {
        Layout::Pretty => {
            let _ = write!(line, "{} ", timestamp(event));
            push_label(&mut line, label);
            let _ = write!(line, "{}: {}", level, event.message);
            if !event.fields.is_empty() {
                let _ = write!(line, " > {}", serde_json::to_string(&event.fields)?);
            }
        }
        Layout::Simple => {
            push_label(&mut line, label);
            let _ = write!(line, "{}: {}", level, event.message);
        }
        Layout::Plain => {
            let _ = write!(line, "{}: {}", level, event.message);
            if !event.fields.is_empty() {
                let _ = write!(line, " {}", serde_json::to_string(&event.fields)?);
            }
        }
        Layout::Json => {
            let mut object = event.fields.clone();
            object.insert("level".into(), Value::from(event.level.as_str()));
            object.insert("message".into(), Value::from(event.message.as_str()));
            if let Some(label) = label {
                object.insert("label".into(), Value::from(label));
            }
            object.insert("timestamp".into(), Value::from(timestamp(event)));
            line = serde_json::to_string(&Value::Object(object))?;
        }
    }

    Ok(line)
}

fn timestamp(event: &LogEvent) -> String {
    event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn push_label(line: &mut String, label: Option<&str>) {
    if let Some(label) = label {
        let _ = write!(line, "[{}] ", label);
    }
}
