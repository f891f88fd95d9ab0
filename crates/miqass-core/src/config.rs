//! Environment-driven application configuration.
//!
//! Parsing is decoupled from the process environment via a lookup closure
//! so the whole loader is unit-testable against a plain `HashMap`.

use std::net::SocketAddr;

use crate::ConfigError;

/// Everything the server needs from the environment, resolved once at
/// startup. A missing content-API URL fails startup rather than surfacing
/// later as per-request fetch failures.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote content API, e.g. `https://cms.miqass.com/api`.
    pub content_api_url: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Client-side ceiling on every content-API request.
    pub content_api_timeout_secs: u64,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let content_api_url = require("MIQASS_CONTENT_API_URL")?;
    if content_api_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "MIQASS_CONTENT_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let bind_addr = parse_addr("MIQASS_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("MIQASS_LOG_LEVEL", "info");
    let content_api_timeout_secs = parse_u64("MIQASS_CONTENT_API_TIMEOUT_SECS", "8")?;

    Ok(AppConfig {
        content_api_url,
        bind_addr,
        log_level,
        content_api_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("MIQASS_CONTENT_API_URL", "https://cms.miqass.com/api");
        m
    }

    #[test]
    fn fails_without_content_api_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MIQASS_CONTENT_API_URL"),
            "expected MissingEnvVar(MIQASS_CONTENT_API_URL), got: {result:?}"
        );
    }

    #[test]
    fn rejects_blank_content_api_url() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("MIQASS_CONTENT_API_URL", "   ");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIQASS_CONTENT_API_URL"),
            "expected InvalidEnvVar(MIQASS_CONTENT_API_URL), got: {result:?}"
        );
    }

    #[test]
    fn fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("MIQASS_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIQASS_BIND_ADDR"),
            "expected InvalidEnvVar(MIQASS_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn succeeds_with_defaults() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.content_api_url, "https://cms.miqass.com/api");
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.content_api_timeout_secs, 8);
    }

    #[test]
    fn bind_addr_override() {
        let mut map = full_env();
        map.insert("MIQASS_BIND_ADDR", "127.0.0.1:9090");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn log_level_override() {
        let mut map = full_env();
        map.insert("MIQASS_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn timeout_override() {
        let mut map = full_env();
        map.insert("MIQASS_CONTENT_API_TIMEOUT_SECS", "30");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.content_api_timeout_secs, 30);
    }

    #[test]
    fn timeout_invalid() {
        let mut map = full_env();
        map.insert("MIQASS_CONTENT_API_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIQASS_CONTENT_API_TIMEOUT_SECS"),
            "expected InvalidEnvVar(MIQASS_CONTENT_API_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
