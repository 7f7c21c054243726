use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::{error::Result, logger};

pub const DEFAULT_MAX_SIZE: usize = 10;

/// Upper bound on the slots reserved up front, whatever the capacity.
pub(crate) const MAX_PREALLOC: usize = 1024;

const MAX_SIZE_ENV: &str = "BOUNDED_PQ_MAX_SIZE";

/// Construction options for a bounded queue.
///
/// `max_size` is the eviction threshold and also the initial allocation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub max_size: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl QueueConfig {
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_json(&s)
    }

    /// Reads `BOUNDED_PQ_MAX_SIZE`, keeping the default when unset or invalid.
    pub fn from_env() -> Self {
        let mut out = Self::default();

        if let Ok(raw) = env::var(MAX_SIZE_ENV) {
            let raw = raw.trim();
            match raw.parse::<usize>() {
                Ok(max_size) => out.max_size = max_size,
                Err(_) if raw.is_empty() => {}
                Err(_) => logger::log_warning(&format!(
                    "invalid {} {:?}, reverting to {}",
                    MAX_SIZE_ENV, raw, DEFAULT_MAX_SIZE
                )),
            }
        }

        out
    }

    pub(crate) fn prealloc(&self) -> usize {
        self.max_size.min(MAX_PREALLOC)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, io::Write};

    use super::{QueueConfig, DEFAULT_MAX_SIZE, MAX_PREALLOC, MAX_SIZE_ENV};
    use crate::{
        error::ConfigError,
        logger::{capture, TARGET},
    };

    #[test]
    fn test_config_default() {
        assert_eq!(QueueConfig::default().max_size, DEFAULT_MAX_SIZE);
        assert_eq!(QueueConfig::from_json("{}").unwrap().max_size, 10);
    }

    #[test]
    fn test_config_from_json() {
        let config = QueueConfig::from_json(r#"{"max_size": 3}"#).unwrap();
        assert_eq!(config, QueueConfig::new(3));
    }

    #[test]
    fn test_config_from_json_invalid() {
        let err = QueueConfig::from_json(r#"{"max_size": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_size": 42}}"#).unwrap();
        let config = QueueConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_size, 42);
    }

    #[test]
    fn test_config_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = QueueConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_config_from_env() {
        capture::start();
        env::set_var(MAX_SIZE_ENV, " 7 ");
        assert_eq!(QueueConfig::from_env().max_size, 7);
        assert!(capture::take().is_empty());

        env::set_var(MAX_SIZE_ENV, "seven");
        assert_eq!(QueueConfig::from_env().max_size, DEFAULT_MAX_SIZE);
        let records = capture::take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, log::Level::Warn);
        assert_eq!(records[0].target, TARGET);
        assert_eq!(
            records[0].message,
            r#"invalid BOUNDED_PQ_MAX_SIZE "seven", reverting to 10"#
        );
        env::remove_var(MAX_SIZE_ENV);
        assert_eq!(QueueConfig::from_env().max_size, DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_config_prealloc_clamped() {
        assert_eq!(QueueConfig::new(5).prealloc(), 5);
        assert_eq!(QueueConfig::new(usize::MAX).prealloc(), MAX_PREALLOC);
    }
}
