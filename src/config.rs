//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{library, limits};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of chord sheet files, if one exists
    pub library_path: Option<PathBuf>,
    /// Maximum accepted content length in characters
    pub max_content_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: None,
            max_content_length: limits::MAX_CONTENT_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("MAX_CONTENT_LENGTH") {
            config.max_content_length = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    Error::config(
                        format!("MAX_CONTENT_LENGTH is not a positive integer: {raw:?}"),
                        "Set MAX_CONTENT_LENGTH to a number of characters, e.g. 10000",
                    )
                })?;
        }

        // Library path: env var override, or default ~/Documents/Chord Sheets/
        config.library_path = lookup("CHORDSHEET_LIBRARY").map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join(library::DEFAULT_LIBRARY_DIR))
                    .filter(|p| p.is_dir())
            },
            |path| {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                if p.is_dir() {
                    Some(p)
                } else {
                    tracing::warn!("CHORDSHEET_LIBRARY is not a directory: {}", p.display());
                    None
                }
            },
        );

        Ok(config)
    }

    /// Check if a sheet library directory is configured
    pub const fn has_library(&self) -> bool {
        self.library_path.is_some()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_content_length, limits::MAX_CONTENT_LENGTH);
        assert!(!config.has_library());
    }

    #[test]
    fn test_max_content_length_override() {
        let config = Config::from_lookup(lookup(&[("MAX_CONTENT_LENGTH", " 500 ")])).unwrap();
        assert_eq!(config.max_content_length, 500);
    }

    #[test]
    fn test_invalid_max_content_length() {
        for bad in ["lots", "0", "-3"] {
            let err = Config::from_lookup(lookup(&[("MAX_CONTENT_LENGTH", bad)])).unwrap_err();
            assert!(matches!(err, Error::Config { .. }), "unexpected error: {err:?}");
        }
    }

    #[test]
    fn test_library_path_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup(&[("CHORDSHEET_LIBRARY", path.as_str())])).unwrap();
        assert_eq!(config.library_path.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_missing_library_dir_is_ignored() {
        let config = Config::from_lookup(lookup(&[(
            "CHORDSHEET_LIBRARY",
            "/tmp/nonexistent_chordsheet_library_test",
        )]))
        .unwrap();
        assert!(config.library_path.is_none());
    }
}
