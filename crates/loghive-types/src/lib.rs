//! # loghive Types
//!
//! Core types, traits, and enums shared across all loghive crates.
//!
//! This crate provides the fundamental building blocks for the hierarchical
//! logger registry, including:
//!
//! - A validated dotted logger name
//! - The severity scale and output layouts
//! - The `Sink` trait and the `LogEvent` it consumes
//! - Declarative configuration data
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use loghive_types::{LoggerName, Severity};
//!
//! let name = LoggerName::new("app.db.pool").unwrap();
//! assert_eq!(name.as_str(), "app.db.pool");
//! assert!(name.is_descendant_of("app"));
//! assert!(!name.is_descendant_of("app.d"));
//!
//! // `warn` passes an `info` threshold, `debug` does not
//! assert!(Severity::Warn.passes(Severity::Info));
//! assert!(!Severity::Debug.passes(Severity::Info));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod event;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{LogError, Result, SinkError};
pub use identifiers::{LoggerName, ROOT};
pub use enums::{Layout, Severity, Stream, WalkPolicy};
pub use event::{Fields, LogEvent};
pub use traits::Sink;
