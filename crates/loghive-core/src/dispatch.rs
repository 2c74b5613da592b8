//! Event delivery and the propagation walk.
//!
//! A dispatch is synchronous: it filters at the origin, delivers to the
//! origin's sinks, and then, if the origin propagates, walks the ancestor
//! chain once, applying each ancestor's own threshold. Filtering at a node
//! never stops the walk. Within a dispatch, delivery follows chain order and
//! then sink-registration order.

use loghive_types::{LogEvent, WalkPolicy};
use tracing::warn;

use crate::node::LoggerNode;
use crate::registry::Registry;

/// Counters describing what one dispatch did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Nodes offered the event, origin included
    pub visited: usize,
    /// Nodes whose threshold rejected the event
    pub filtered: usize,
    /// Successful sink deliveries
    pub delivered: usize,
    /// Sink deliveries that returned an error
    pub failed: usize,
}

/// Deliver `event` at `origin` and propagate it through `registry`.
pub fn dispatch(registry: &Registry, origin: &LoggerNode, event: &LogEvent) -> DispatchReport {
    let mut report = DispatchReport::default();

    deliver(origin, event, &mut report);

    if !origin.propagate() {
        return report;
    }

    let walk = registry.options().walk;
    for ancestor in registry.ancestors(origin.name()) {
        deliver(&ancestor, event, &mut report);
        if walk == WalkPolicy::PerHop && !ancestor.propagate() {
            break;
        }
    }

    report
}

fn deliver(node: &LoggerNode, event: &LogEvent, report: &mut DispatchReport) {
    report.visited += 1;
    if !node.admits(event.level) {
        report.filtered += 1;
        return;
    }

    for sink in node.sinks() {
        if sink.level().is_some_and(|min| !event.level.passes(min)) {
            continue;
        }
        match sink.accept(event) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                report.failed += 1;
                warn!(
                    "Sink '{}' of logger {} failed to accept event from {}: {}",
                    sink.name(),
                    node.name(),
                    event.origin,
                    e
                );
            }
        }
    }
}
