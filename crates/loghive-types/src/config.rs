//! Configuration types and structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::{Layout, Severity, Stream, WalkPolicy};

/// Declarative sink definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkSpec {
    /// Write to stdout or stderr
    Console {
        /// Target stream
        #[serde(default)]
        stream: Stream,
        /// Line layout
        #[serde(default)]
        layout: Layout,
        /// Label shown in brackets
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// Sink-level minimum severity
        #[serde(skip_serializing_if = "Option::is_none")]
        level: Option<Severity>,
        /// Force colors on or off; detected from the terminal when unset
        #[serde(skip_serializing_if = "Option::is_none")]
        colors: Option<bool>,
    },
    /// Append to a file
    File {
        /// File path; parent directories are created
        path: PathBuf,
        /// Line layout
        #[serde(default)]
        layout: Layout,
        /// Label shown in brackets
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// Sink-level minimum severity
        #[serde(skip_serializing_if = "Option::is_none")]
        level: Option<Severity>,
    },
    /// Discard everything
    Silent,
}

/// Reference from a logger to a named transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRef {
    /// Transport name as declared under `transports`
    pub name: String,
    /// Layout override for this logger only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Layout>,
}

impl TransportRef {
    /// Reference a transport without overriding its layout.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: None,
        }
    }
}

/// Declarative logger definition.
///
/// Transports are referenced either by plain name (`transportNames`) or by
/// `transports` entries that may carry a layout override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSpec {
    /// Logger threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Transports by name
    #[serde(
        default,
        rename = "transportNames",
        alias = "transport_names",
        skip_serializing_if = "Option::is_none"
    )]
    pub transport_names: Option<Vec<String>>,
    /// Transports with optional overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<TransportRef>>,
    /// Per-logger propagate flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate: Option<bool>,
}

/// Top-level log manager configuration as found in a file.
///
/// `transports` and `loggers` are optional at the serde level so that their
/// absence is reported as an invalid config rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named transports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<IndexMap<String, SinkSpec>>,
    /// Named loggers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loggers: Option<IndexMap<String, LoggerSpec>>,
    /// Registry-wide propagate default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagate: Option<bool>,
    /// Registry-wide default threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Walk policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk: Option<WalkPolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let yaml = r#"
transports:
  console:
    type: console
    layout: simple
    label: app
  errors:
    type: file
    path: /tmp/errors.log
    level: error
  quiet:
    type: silent
loggers:
  app:
    level: silly
    transportNames: [console, errors]
  app.db:
    transports:
      - name: console
        format: plain
    propagate: false
propagate: true
"#;
        let config: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        let transports = config.transports.unwrap();
        assert_eq!(transports.len(), 3);
        assert_eq!(
            transports.get_index(0).map(|(k, _)| k.as_str()),
            Some("console")
        );
        assert_eq!(transports["quiet"], SinkSpec::Silent);
        assert!(matches!(
            &transports["errors"],
            SinkSpec::File { level: Some(Severity::Error), layout: Layout::Pretty, .. }
        ));

        let loggers = config.loggers.unwrap();
        assert_eq!(loggers["app"].level, Some(Severity::Silly));
        assert_eq!(
            loggers["app"].transport_names.as_deref(),
            Some(&["console".to_string(), "errors".to_string()][..])
        );
        let db = &loggers["app.db"];
        assert_eq!(db.propagate, Some(false));
        assert_eq!(
            db.transports.as_ref().unwrap()[0].format,
            Some(Layout::Plain)
        );
        assert_eq!(config.propagate, Some(true));
    }

    #[test]
    fn test_missing_sections_parse_as_none() {
        let config: ConfigFile = serde_yaml::from_str("propagate: false").unwrap();
        assert!(config.transports.is_none());
        assert!(config.loggers.is_none());
    }
}
