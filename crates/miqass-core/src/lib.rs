use thiserror::Error;

pub mod catalog;
pub mod config;
pub mod contact;
pub mod locale;
pub mod translations;

pub use config::{load_app_config, load_app_config_from_env, AppConfig};
pub use locale::{Direction, Locale, DEFAULT_LOCALE, LOCALES};

/// Errors produced while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
