//! Shared data model and configuration for the race calendar workspace.

pub mod app_config;
pub mod config;
pub mod event;

use thiserror::Error;

pub use app_config::{AppConfig, RetrySettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use event::{Event, EventType, GeoCoordinates, Location};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
