//! Type-safe logger names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use crate::errors::{LogError, Result};

/// Name of the distinguished top-level logger.
pub const ROOT: &str = "root";

/// A validated dotted logger name.
///
/// Logger names must:
/// - Be non-empty
/// - Not contain empty segments (no leading, trailing, or doubled `.`)
/// - Not contain whitespace or control characters
///
/// Hierarchy is purely lexical: `a.b` is an ancestor of `a.b.c` because
/// `a.b.c` starts with `a.b.`, and `ab` is never an ancestor of `abc.def`.
///
/// # Example
///
/// ```
/// use loghive_types::LoggerName;
///
/// let name = LoggerName::new("http.server").unwrap();
/// assert_eq!(name.depth(), 2);
/// assert!(name.is_descendant_of("http"));
///
/// // Invalid names are rejected
/// assert!(LoggerName::new("http..server").is_err());
/// assert!(LoggerName::new(".http").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerName(String);

impl LoggerName {
    /// Create a new validated logger name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name doesn't meet validation requirements.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        Self::try_from(name.as_ref().to_string())
    }

    /// The root logger name.
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// Check if a name is valid without allocating.
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name
                .split('.')
                .all(|segment| {
                    !segment.is_empty()
                        && !segment.chars().any(|c| c.is_whitespace() || c.is_control())
                })
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the root logger name.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// Number of dot-separated segments.
    pub fn depth(&self) -> usize {
        self.0.split('.').count()
    }

    /// Whether `ancestor` is a strict dot-prefix of this name.
    ///
    /// The root name is not treated specially here.
    pub fn is_descendant_of(&self, ancestor: &str) -> bool {
        self.0.len() > ancestor.len()
            && self.0.starts_with(ancestor)
            && self.0.as_bytes()[ancestor.len()] == b'.'
    }
}

impl fmt::Display for LoggerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LoggerName {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LoggerName {
    type Error = LogError;

    fn try_from(value: String) -> Result<Self> {
        if !Self::is_valid(&value) {
            return Err(LogError::InvalidName(format!(
                "'{}': must be non-empty dot-separated segments without whitespace",
                value
            )));
        }
        Ok(Self(value))
    }
}

impl From<LoggerName> for String {
    fn from(name: LoggerName) -> Self {
        name.0
    }
}

impl AsRef<str> for LoggerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LoggerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_name_validation() {
        assert!(LoggerName::new("root").is_ok());
        assert!(LoggerName::new("a").is_ok());
        assert!(LoggerName::new("a.b.c").is_ok());
        assert!(LoggerName::new("Service-1.worker_2").is_ok());

        assert!(LoggerName::new("").is_err());
        assert!(LoggerName::new(".a").is_err());
        assert!(LoggerName::new("a.").is_err());
        assert!(LoggerName::new("a..b").is_err());
        assert!(LoggerName::new("a b").is_err());
        assert!(LoggerName::new("a.\tb").is_err());
    }

    #[test]
    fn test_descendant_is_lexical_on_dots() {
        let name = LoggerName::new("abc.def").unwrap();
        assert!(name.is_descendant_of("abc"));
        assert!(!name.is_descendant_of("ab"));
        assert!(!name.is_descendant_of("abc.def"));
        assert!(!name.is_descendant_of("abc.de"));
    }

    #[test]
    fn test_depth_and_root() {
        assert_eq!(LoggerName::new("a.b.c").unwrap().depth(), 3);
        assert!(LoggerName::root().is_root());
        assert!(!LoggerName::new("roots").unwrap().is_root());
    }

    #[test]
    fn test_serde_rejects_invalid_names() {
        let ok: LoggerName = serde_json::from_str("\"a.b\"").unwrap();
        assert_eq!(ok.as_str(), "a.b");
        assert!(serde_json::from_str::<LoggerName>("\"a..b\"").is_err());
    }

    #[test]
    fn test_try_from_string() {
        let name = LoggerName::try_from("http.server".to_string()).unwrap();
        assert_eq!(name.as_str(), "http.server");

        let err = LoggerName::try_from("http server".to_string()).unwrap_err();
        assert!(matches!(err, LogError::InvalidName(ref msg) if msg.starts_with("'http server'")));
    }
}
