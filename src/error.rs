//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.
//! Parsing chord content never fails; these errors cover configuration,
//! file access, and the catalog rules applied to user input.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Input rejected by a catalog rule
    #[error("{message}")]
    Validation {
        /// Form field the rule applies to.
        field: &'static str,
        /// User-facing message, suitable for a flash banner.
        message: String,
    },

    /// Sheet library error
    #[error("Library error: {0}")]
    Library(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a validation error for a form field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    /// Field name for validation errors, `None` for everything else.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn validation_displays_only_the_message() {
        let err = Error::validation("content", "Content is required");
        assert_eq!(err.to_string(), "Content is required");
        assert_eq!(err.field(), Some("content"));
    }

    #[test]
    fn config_includes_hint() {
        let err = Error::config("MAX_CONTENT_LENGTH is not a number", "Use a positive integer");
        let text = err.to_string();
        assert!(text.contains("MAX_CONTENT_LENGTH"));
        assert!(text.ends_with("Use a positive integer"));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn io_keeps_path_context() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        match Error::io(source, std::path::PathBuf::from("/tmp/sheet.txt")) {
            Error::Io { path: Some(p), .. } => assert!(p.ends_with("sheet.txt")),
            other => panic!("Expected Io error with path, got {other:?}"),
        }
    }

    #[test]
    fn io_conversion_has_no_path() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, Error::Io { path: None, .. }));
    }
}
