//! Validate a configuration and list its loggers.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn execute(config: &Path) -> Result<()> {
    let manager = super::load_manager(config)?;
    let registry = manager.registry();

    println!("{} {:?}", "Configuration OK:".green().bold(), config);
    println!("{}", "=".repeat(50));

    for name in registry.names() {
        let Some(node) = registry.node(name.as_str()) else {
            continue;
        };
        let sinks: Vec<&str> = node.sinks().iter().map(|s| s.name()).collect();
        println!(
            "  {:<24} level={:<8} propagate={:<5} sinks=[{}]",
            name.as_str().cyan(),
            node.level().to_string(),
            node.propagate(),
            sinks.join(", ")
        );
    }

    Ok(())
}
