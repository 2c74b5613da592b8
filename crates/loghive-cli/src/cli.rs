//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loghive")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hierarchical logger configuration tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging configuration file (YAML)
    #[arg(short, long, global = true, env = "LOGHIVE_CONFIG", default_value = "logging.yml")]
    pub config: PathBuf,

    /// Show loghive's own debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit one event through the configured hierarchy
    Emit {
        /// Logger name
        logger: String,

        /// Severity level
        level: String,

        /// Message text
        message: String,

        /// Structured field as key=value (repeatable)
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,

        /// Print a delivery summary to stderr
        #[arg(long)]
        report: bool,
    },

    /// Show the ancestor chain of a logger
    Chain {
        /// Logger name
        logger: String,
    },

    /// Validate the configuration and list its loggers
    Check,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Emit { logger, level, message, fields, report } => {
                emit::execute(&self.config, logger, level, message, fields, *report)
            }
            Commands::Chain { logger } => {
                chain::execute(&self.config, logger)
            }
            Commands::Check => {
                check::execute(&self.config)
            }
        }
    }
}
