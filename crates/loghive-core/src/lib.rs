//! # loghive Core
//!
//! A hierarchical logger registry: named loggers (`"a"`, `"a.b"`, `"a.b.c"`)
//! with independent thresholds and sinks, where an event emitted at a leaf
//! travels up its chain of registered ancestors.
//!
//! This crate provides:
//!
//! - **Registry**: name → node mapping, synthesized nodes for unknown names
//! - **Chain resolution**: ordered ancestors, most specific first, root last
//! - **Dispatch**: per-node filtering and the propagation walk
//! - **Sinks**: console, file, in-memory, and silent outputs with layouts
//! - **Log manager**: declarative multi-transport configuration
//! - **Diagnostics**: `tracing` setup for the library's own messages
//!
//! ## Example
//!
//! ```rust
//! use loghive_core::{NodeConfig, Registry, sinks::MemorySink};
//! use loghive_types::{Layout, Severity};
//!
//! let registry = Registry::new();
//! let out = MemorySink::new("out").layout(Layout::Simple);
//!
//! registry.add("root", NodeConfig::new().level(Severity::Error).sink(out.clone().label("root")))?;
//! registry.add("app", NodeConfig::new().sink(out.clone().label("app")))?;
//!
//! registry.get("app.worker")?.info("started");
//! registry.get("app")?.error("failed");
//!
//! assert_eq!(
//!     out.lines(),
//!     vec!["[app] info: started", "[app] error: failed", "[root] error: failed"]
//! );
//! # Ok::<(), loghive_types::LogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod config;
pub mod dispatch;
pub mod format;
pub mod log;
pub mod logger;
pub mod manager;
pub mod node;
pub mod registry;
pub mod sinks;
pub mod term;

// Re-export commonly used items
pub use chain::resolve_chain;
pub use dispatch::{dispatch, DispatchReport};
pub use logger::Logger;
pub use manager::{LogManager, ManagerConfig};
pub use node::{LoggerNode, NodeConfig, NodeOrigin};
pub use registry::{Lookup, Registry, RegistryOptions};
pub use loghive_types::{LogError, Result};

/// loghive version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
