//! Show the ancestor chain of a logger.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn execute(config: &Path, logger: &str) -> Result<()> {
    let manager = super::load_manager(config)?;
    let registry = manager.registry();

    let origin = manager
        .get(logger)
        .with_context(|| format!("Cannot resolve logger '{}'", logger))?;
    let node = origin.node();

    println!(
        "{} {} (level={}, propagate={})",
        node.name().as_str().cyan().bold(),
        if origin.is_synthesized() { "[synthesized]".yellow().to_string() } else { String::new() },
        node.level(),
        node.propagate()
    );

    if !node.propagate() {
        println!("  {}", "does not propagate".dimmed());
        return Ok(());
    }

    for (depth, ancestor) in registry.chain(node.name())?.iter().enumerate() {
        let Some(ancestor) = registry.node(ancestor.as_str()) else {
            continue;
        };
        let sinks: Vec<&str> = ancestor.sinks().iter().map(|s| s.name()).collect();
        println!(
            "{}└─ {} (level={}, sinks=[{}])",
            "   ".repeat(depth),
            ancestor.name().as_str().green(),
            ancestor.level(),
            sinks.join(", ")
        );
    }

    Ok(())
}
