use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the service-account key file.
pub const CREDENTIALS_ENV: &str = "FIREBASE_CREDENTIALS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("FIREBASE_CREDENTIALS environment variable not set (or pass --credentials)")]
    CredentialsUnset,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level application configuration, loaded from TOML.
///
/// Every section has defaults, so a missing or partial file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Collection layout of the document store: a top-level entity collection
/// plus a per-entity sub-collection of log entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Collection holding one document per entity (pet).
    pub entities_collection: String,
    /// Collection holding one document per entity id, each owning entries.
    pub logs_collection: String,
    /// Sub-collection of log entries under each entity's log document.
    pub entries_subcollection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            entities_collection: "users".into(),
            logs_collection: "medication_logs".into(),
            entries_subcollection: "entries".into(),
        }
    }
}

/// Reporter output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Chart output path, overwritten on each run.
    pub chart_path: PathBuf,
    /// Cap on the number of medications shown in the printed ranking.
    pub limit: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_path: PathBuf::from("medication_usage.png"),
            limit: None,
        }
    }
}

/// Resolve the service-account key path from the CLI override or the
/// `FIREBASE_CREDENTIALS` environment value, in that order.
///
/// Takes the environment value as a parameter so callers decide how it is
/// read and tests never touch process-wide state. An unset (or empty)
/// variable is a configuration error checked before any store call.
pub fn credentials_path(
    cli_override: Option<PathBuf>,
    env_value: Option<OsString>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = cli_override {
        return Ok(path);
    }
    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(ConfigError::CredentialsUnset),
    }
}
