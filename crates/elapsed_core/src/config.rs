//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Decide where the slot database and log files live.
//! - Pick the log level and the initial display unit.
//!
//! # Invariants
//! - `data_dir` is always absolute.
//! - Every derived path sits under `data_dir`.

use crate::logging::default_log_level;
use crate::model::unit::{DisplayUnit, UnknownUnitError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "ELAPSED_HOME";
pub const LOG_LEVEL_ENV: &str = "ELAPSED_LOG_LEVEL";
pub const UNIT_ENV: &str = "ELAPSED_UNIT";

const DB_FILE_NAME: &str = "elapsed.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    RelativeDataDir(PathBuf),
    InvalidUnit(UnknownUnitError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeDataDir(path) => write!(
                f,
                "{HOME_ENV} must be an absolute path, got `{}`",
                path.display()
            ),
            Self::InvalidUnit(err) => write!(f, "{UNIT_ENV}: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUnit(err) => Some(err),
            Self::RelativeDataDir(_) => None,
        }
    }
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    /// Passed to `init_logging` as-is; validated there.
    pub log_level: String,
    pub default_unit: DisplayUnit,
}

impl AppConfig {
    /// Builds the configuration rooted at `data_dir` with default level and unit.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.into();
        if !data_dir.is_absolute() {
            return Err(ConfigError::RelativeDataDir(data_dir));
        }
        Ok(Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            log_level: default_log_level().to_string(),
            default_unit: DisplayUnit::default(),
        })
    }

    /// Reads `ELAPSED_HOME`, `ELAPSED_LOG_LEVEL` and `ELAPSED_UNIT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with variables supplied by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = match value(HOME_ENV) {
            Some(dir) => PathBuf::from(dir.trim()),
            None => default_data_dir(value("HOME").as_deref().map(Path::new)),
        };

        let mut config = Self::with_data_dir(data_dir)?;
        if let Some(level) = value(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Some(unit) = value(UNIT_ENV) {
            config.default_unit = unit.parse().map_err(ConfigError::InvalidUnit)?;
        }
        Ok(config)
    }
}

fn default_data_dir(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if home.is_absolute() => home.join(".local").join("share").join("elapsed"),
        _ => std::env::temp_dir().join("elapsed"),
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, HOME_ENV, UNIT_ENV};
    use crate::model::unit::DisplayUnit;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_home_drives_all_paths() {
        let config =
            AppConfig::from_lookup(lookup(&[(HOME_ENV, "/srv/elapsed"), (UNIT_ENV, "Days")]))
                .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/srv/elapsed/elapsed.sqlite3"));
        assert_eq!(config.log_dir, PathBuf::from("/srv/elapsed/logs"));
        assert_eq!(config.default_unit, DisplayUnit::Days);
    }

    #[test]
    fn falls_back_to_user_home() {
        let config = AppConfig::from_lookup(lookup(&[("HOME", "/home/someone")])).unwrap();
        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/someone/.local/share/elapsed")
        );
        assert_eq!(config.default_unit, DisplayUnit::Years);
    }

    #[test]
    fn rejects_relative_home_and_unknown_unit() {
        let relative = AppConfig::from_lookup(lookup(&[(HOME_ENV, "data")])).unwrap_err();
        assert!(matches!(relative, ConfigError::RelativeDataDir(_)));

        let unit = AppConfig::from_lookup(lookup(&[(HOME_ENV, "/srv/elapsed"), (UNIT_ENV, "weeks")]))
            .unwrap_err();
        assert!(matches!(unit, ConfigError::InvalidUnit(_)));
    }
}
