//! Common enumerations used throughout loghive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{LogError, Result};

/// Severity of a log event.
///
/// Variants are declared from most to least severe, so the derived ordering
/// follows rank: `Error < Warn < ... < Silly`. A threshold admits every level
/// whose rank is at or below its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failures that need attention
    Error,
    /// Potential problems
    Warn,
    /// Normal operational messages
    #[default]
    Info,
    /// Request/response traffic
    Http,
    /// More detail than info
    Verbose,
    /// Debugging detail
    Debug,
    /// Everything
    Silly,
}

impl Severity {
    /// All levels in rank order.
    pub const ALL: [Severity; 7] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Http,
        Severity::Verbose,
        Severity::Debug,
        Severity::Silly,
    ];

    /// Numeric rank; lower is more severe.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether an event at this level passes `threshold`.
    pub fn passes(self, threshold: Severity) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Lowercase level name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Http => "http",
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Silly => "silly",
        }
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "http" => Ok(Severity::Http),
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "silly" => Ok(Severity::Silly),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a sink renders an event into a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `{timestamp} [{label}] {level}: {message} > {fields}`
    #[default]
    Pretty,
    /// `[{label}] {level}: {message}`
    Simple,
    /// `{level}: {message} {fields}`
    Plain,
    /// One JSON object per line
    Json,
}

impl FromStr for Layout {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Layout::Pretty),
            "simple" => Ok(Layout::Simple),
            "plain" => Ok(Layout::Plain),
            "json" => Ok(Layout::Json),
            _ => Err(LogError::InvalidLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Pretty => write!(f, "pretty"),
            Layout::Simple => write!(f, "simple"),
            Layout::Plain => write!(f, "plain"),
            Layout::Json => write!(f, "json"),
        }
    }
}

/// Console output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

/// Whether ancestor propagate flags can cut a walk short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkPolicy {
    /// The origin's flag alone decides; the whole chain is walked.
    #[default]
    Chain,
    /// Each ancestor is delivered to, then the walk stops at the first
    /// ancestor whose own propagate flag is false.
    PerHop,
}
