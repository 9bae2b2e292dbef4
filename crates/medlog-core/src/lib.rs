//! Shared types for the medlog pipeline: the flattened medication row and
//! the application configuration.

pub mod config;
pub mod row;

pub use config::{credentials_path, AppConfig, ConfigError, ReportConfig, StoreConfig, CREDENTIALS_ENV};
pub use row::MedicationRow;
