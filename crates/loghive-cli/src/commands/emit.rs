//! Emit an event through the configured hierarchy.

use anyhow::{bail, Context, Result};
use loghive_types::{Fields, Severity};
use serde_json::Value;
use std::path::Path;

pub fn execute(
    config: &Path,
    logger: &str,
    level: &str,
    message: &str,
    fields: &[String],
    report: bool,
) -> Result<()> {
    let level: Severity = level.parse()?;
    let fields = parse_fields(fields)?;

    let manager = super::load_manager(config)?;
    let logger = manager
        .get(logger)
        .with_context(|| format!("Cannot resolve logger '{}'", logger))?;

    let summary = logger.log_with(level, message, fields);

    if report {
        eprintln!(
            "{}: visited {} logger(s), {} filtered, {} delivered, {} failed",
            logger.name(),
            summary.visited,
            summary.filtered,
            summary.delivered,
            summary.failed
        );
    }

    Ok(())
}

/// Parse `key=value` pairs; values that are valid JSON keep their type.
fn parse_fields(raw: &[String]) -> Result<Fields> {
    let mut fields = Fields::new();
    for pair in raw {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Invalid field '{}': expected KEY=VALUE", pair);
        };
        if key.is_empty() {
            bail!("Invalid field '{}': empty key", pair);
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        fields.insert(key.to_string(), value);
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_fields() {
        let raw = vec!["user=alice".to_string(), "retries=3".to_string(), "ok=true".to_string()];
        let fields = parse_fields(&raw).unwrap();
        assert_eq!(fields["user"], json!("alice"));
        assert_eq!(fields["retries"], json!(3));
        assert_eq!(fields["ok"], json!(true));
    }

    #[test]
    fn test_parse_fields_rejects_malformed() {
        assert!(parse_fields(&["novalue".to_string()]).is_err());
        assert!(parse_fields(&["=x".to_string()]).is_err());
    }
}
