//! Logger handles returned by lookups.

use loghive_types::{Fields, LogEvent, LoggerName, Severity};
use std::fmt;
use std::sync::Arc;

use crate::dispatch::{dispatch, DispatchReport};
use crate::node::{LoggerNode, NodeOrigin};
use crate::registry::Registry;

/// A handle bound to one node of a registry.
///
/// The node is fixed at lookup time; ancestors are resolved against the
/// registry on every call, so loggers added later still receive propagated
/// events.
#[derive(Clone)]
pub struct Logger {
    registry: Registry,
    node: Arc<LoggerNode>,
}

impl Logger {
    pub(crate) fn new(registry: Registry, node: Arc<LoggerNode>) -> Self {
        Self { registry, node }
    }

    /// Logger name.
    pub fn name(&self) -> &LoggerName {
        self.node.name()
    }

    /// The bound node.
    pub fn node(&self) -> &Arc<LoggerNode> {
        &self.node
    }

    /// Whether the node was synthesized for an unknown name.
    pub fn is_synthesized(&self) -> bool {
        self.node.origin() == NodeOrigin::Synthesized
    }

    /// Whether this logger's own sinks would see an event at `level`.
    pub fn enabled(&self, level: Severity) -> bool {
        self.node.admits(level)
    }

    /// Emit a prepared event.
    ///
    /// The event keeps its own origin; callers normally use the level
    /// methods instead.
    pub fn log_event(&self, event: &LogEvent) -> DispatchReport {
        dispatch(&self.registry, &self.node, event)
    }

    /// Emit `message` at `level`.
    pub fn log(&self, level: Severity, message: impl Into<String>) -> DispatchReport {
        self.log_event(&LogEvent::new(self.name().clone(), level, message))
    }

    /// Emit `message` at `level` with structured fields.
    pub fn log_with(&self, level: Severity, message: impl Into<String>, fields: Fields) -> DispatchReport {
        self.log_event(&LogEvent::new(self.name().clone(), level, message).with_fields(fields))
    }

    /// Emit at `error`.
    pub fn error(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Error, message)
    }

    /// Emit at `warn`.
    pub fn warn(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Warn, message)
    }

    /// Emit at `info`.
    pub fn info(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Info, message)
    }

    /// Emit at `http`.
    pub fn http(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Http, message)
    }

    /// Emit at `verbose`.
    pub fn verbose(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Verbose, message)
    }

    /// Emit at `debug`.
    pub fn debug(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Debug, message)
    }

    /// Emit at `silly`.
    pub fn silly(&self, message: impl Into<String>) -> DispatchReport {
        self.log(Severity::Silly, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("node", &self.node).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeConfig;
    use crate::registry::RegistryOptions;
    use crate::sinks::MemorySink;
    use loghive_types::Layout;
    use serde_json::json;

    const PROPAGATED: [&str; 3] = ["a", "a.b", "a.b.c"];
    const NON_PROPAGATED: [&str; 3] = ["x", "x.y", "x.y.z"];

    fn with_root(options: RegistryOptions, out: &MemorySink) -> Registry {
        let registry = Registry::with_options(options);
        registry.add("root", NodeConfig::new().sink(out.clone().label("root"))).unwrap();
        registry
    }

    #[test]
    fn test_each_new_logger_extends_the_chain() {
        let out = MemorySink::new("m");
        let registry = with_root(RegistryOptions::default(), &out);

        for (idx, name) in PROPAGATED.iter().enumerate() {
            registry.add(name, NodeConfig::new().sink(out.clone().label(*name))).unwrap();
            registry.get(name).unwrap().info(*name);

            let lines = out.take();
            assert_eq!(lines.len(), idx + 2);
            for i in 0..=idx {
                assert_eq!(lines[i], format!("[{}] info: {}", PROPAGATED[idx - i], name));
            }
            assert_eq!(lines[idx + 1], format!("[root] info: {}", name));
        }
    }

    #[test]
    fn test_non_propagated_logger_below_propagated_ones() {
        let out = MemorySink::new("m");
        let registry = with_root(RegistryOptions::default(), &out);
        for name in PROPAGATED {
            registry.add(name, NodeConfig::new().sink(out.clone().label(name))).unwrap();
        }
        registry
            .add("a.b.c.d", NodeConfig::new().propagate(false).sink(out.clone().label("a.b.c.d")))
            .unwrap();
        registry.add("a.b.c.d.e", NodeConfig::new().sink(out.clone().label("a.b.c.d.e"))).unwrap();

        registry.get("a.b.c.d").unwrap().info("a.b.c.d");
        assert_eq!(out.take(), vec!["[a.b.c.d] info: a.b.c.d"]);

        // the whole chain is walked from the origin's flag
        registry.get("a.b.c.d.e").unwrap().info("e");
        assert_eq!(
            out.take(),
            vec![
                "[a.b.c.d.e] info: e",
                "[a.b.c.d] info: e",
                "[a.b.c] info: e",
                "[a.b] info: e",
                "[a] info: e",
                "[root] info: e",
            ]
        );
    }

    #[test]
    fn test_non_propagated_loggers_log_alone() {
        let out = MemorySink::new("m");
        let registry = with_root(RegistryOptions::default(), &out);
        for name in NON_PROPAGATED {
            registry
                .add(name, NodeConfig::new().propagate(false).sink(out.clone().label(name)))
                .unwrap();
        }
        for name in NON_PROPAGATED {
            registry.get(name).unwrap().info(name);
            assert_eq!(out.take(), vec![format!("[{}] info: {}", name, name)]);
        }
    }

    #[test]
    fn test_registry_without_propagation() {
        let out = MemorySink::new("m");
        let registry = with_root(RegistryOptions::default().with_propagate(false), &out);
        for name in PROPAGATED {
            registry.add(name, NodeConfig::new().sink(out.clone().label(name))).unwrap();
        }
        for name in PROPAGATED {
            registry.get(name).unwrap().info(name);
            assert_eq!(out.take(), vec![format!("[{}] info: {}", name, name)]);
        }
        registry.get("a.b.c.d").unwrap().info("nothing");
        assert!(out.is_empty());
    }

    #[test]
    fn test_two_registries_same_names() {
        let build = |propagate: bool| {
            let out = MemorySink::new("m");
            let registry = with_root(RegistryOptions::default().with_propagate(propagate), &out);
            for name in PROPAGATED {
                registry.add(name, NodeConfig::new().sink(out.clone().label(name))).unwrap();
            }
            registry.get("a.b.c").unwrap().warn("w");
            out.lines()
        };

        assert_eq!(build(false), vec!["[a.b.c] warn: w"]);
        assert_eq!(build(true).len(), 4);
    }

    #[test]
    fn test_handle_sees_ancestors_added_later() {
        let out = MemorySink::new("m");
        let registry = with_root(RegistryOptions::default(), &out);
        let leaf = registry.get("svc.api").unwrap();
        assert!(leaf.is_synthesized());

        registry.add("svc", NodeConfig::new().sink(out.clone().label("svc"))).unwrap();
        leaf.info("late");
        assert_eq!(out.lines(), vec!["[svc] info: late", "[root] info: late"]);
    }

    #[test]
    fn test_bound_handle_keeps_replaced_node() {
        let out = MemorySink::new("m");
        let registry = with_root(RegistryOptions::default(), &out);
        registry.add("a", NodeConfig::new().level(Severity::Silly).sinks(vec![])).unwrap();
        let bound = registry.get("a").unwrap();
        registry.add("a", NodeConfig::new().level(Severity::Error).sinks(vec![])).unwrap();

        assert!(bound.enabled(Severity::Debug));
        assert!(!registry.get("a").unwrap().enabled(Severity::Debug));
    }

    #[test]
    fn test_idempotent_add() {
        let run = |times: usize| {
            let out = MemorySink::new("m");
            let registry = with_root(RegistryOptions::default(), &out);
            for _ in 0..times {
                registry
                    .add("a", NodeConfig::new().level(Severity::Debug).sink(out.clone().label("a")))
                    .unwrap();
            }
            let logger = registry.get("a").unwrap();
            logger.debug("d");
            logger.info("i");
            out.lines()
        };
        assert_eq!(run(1), run(2));
    }

    #[test]
    fn test_structured_fields() {
        let out = MemorySink::new("m").layout(Layout::Plain);
        let registry = with_root(RegistryOptions::default(), &out);
        let mut fields = Fields::new();
        fields.insert("foo".into(), json!("bar"));

        registry.get("root").unwrap().log_with(Severity::Info, "with data", fields);
        assert_eq!(out.lines(), vec![r#"info: with data {"foo":"bar"}"#]);
    }

    #[test]
    fn test_level_methods() {
        let out = MemorySink::new("m");
        let registry = Registry::new();
        registry
            .add("root", NodeConfig::new().level(Severity::Silly).sink(out.clone().label("r")))
            .unwrap();
        let logger = registry.get("root").unwrap();
        logger.error("1");
        logger.warn("2");
        logger.info("3");
        logger.http("4");
        logger.verbose("5");
        logger.debug("6");
        logger.silly("7");
        assert_eq!(
            out.lines(),
            vec![
                "[r] error: 1",
                "[r] warn: 2",
                "[r] info: 3",
                "[r] http: 4",
                "[r] verbose: 5",
                "[r] debug: 6",
                "[r] silly: 7",
            ]
        );
    }
}
