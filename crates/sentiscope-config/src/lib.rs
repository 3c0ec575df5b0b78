//! Environment-driven configuration for the sentiscope server.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "model/sentiment_model.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Service Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Record store connection string, e.g. `sqlite://data/sentiment.db`.
    pub database_url: String,
    /// Serialized predictor artifact, resolved relative to the working directory.
    pub model_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServiceConfig {
    /// Reads the process environment. Callers load `.env` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let model_path = lookup("MODEL_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        Ok(Self {
            database_url,
            model_path: PathBuf::from(model_path),
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[("DATABASE_URL", "sqlite://data/sentiment.db")])).unwrap();
        assert_eq!(config.database_url, "sqlite://data/sentiment.db");
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
    }

    #[test]
    fn test_database_url_required() {
        let err = ServiceConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = ServiceConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_overrides_and_invalid_bind() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("DATABASE_URL", ":memory:"),
            ("MODEL_PATH", "/opt/models/clf.json"),
            ("BIND_ADDR", "127.0.0.1:9090"),
        ]))
        .unwrap();
        assert_eq!(config.model_path, PathBuf::from("/opt/models/clf.json"));
        assert_eq!(config.bind_addr.port(), 9090);

        let err = ServiceConfig::from_lookup(lookup(&[
            ("DATABASE_URL", ":memory:"),
            ("BIND_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
    }
}
