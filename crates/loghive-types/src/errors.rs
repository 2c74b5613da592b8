//! Error types for loghive operations.

use thiserror::Error;

/// The main error type for registry and configuration operations.
#[derive(Error, Debug)]
pub enum LogError {
    /// An unknown logger was requested before a root logger was registered
    #[error("Root logger is not initialized")]
    RootNotInitialized,

    /// No configuration was supplied to the log manager
    #[error("config is required")]
    ConfigRequired,

    /// The configuration is missing required keys or is malformed
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Logger name failed validation
    #[error("Invalid logger name: {0}")]
    InvalidName(String),

    /// Severity name is not part of the scale
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Layout name is not recognised
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// A global diagnostics subscriber is already installed
    #[error("Diagnostics subscriber already installed: {0}")]
    SubscriberInstalled(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for loghive operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Failure reported by a single sink delivery.
///
/// These never escape a dispatch: the dispatcher records them and moves on
/// to the next sink in the chain.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing to the underlying stream or file failed
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured fields could not be rendered
    #[error("sink serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sink no longer accepts events
    #[error("sink '{0}' is closed")]
    Closed(String),

    /// Any other sink-specific failure
    #[error("{0}")]
    Other(String),
}

/// Helper macro to bail out with a LogError
///
/// # Example
///
/// ```ignore
/// if config.loggers.is_none() {
///     bail!(InvalidConfig, "missing '{}' key", "loggers");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident) => {
        return Err($crate::LogError::$variant)
    };
    ($variant:ident, $msg:expr) => {
        return Err($crate::LogError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::LogError::$variant(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_loggers() -> Result<()> {
        bail!(InvalidConfig, "missing '{}' key", "loggers");
    }

    fn no_config() -> Result<()> {
        bail!(ConfigRequired);
    }

    #[test]
    fn test_bail_formats_message() {
        let err = missing_loggers().unwrap_err();
        assert_eq!(err.to_string(), "invalid config: missing 'loggers' key");
    }

    #[test]
    fn test_bail_unit_variant() {
        assert!(matches!(no_config(), Err(LogError::ConfigRequired)));
    }

    #[test]
    fn test_root_message() {
        assert_eq!(
            LogError::RootNotInitialized.to_string(),
            "Root logger is not initialized"
        );
    }
}
