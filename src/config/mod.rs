use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod loader;

pub use loader::ConfigLoader;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "syracuse.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub log_level: Option<String>,
    pub cors: CorsConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Allowed origins; empty means any origin.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Request limits applied by the HTTP layer. Unset means unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_start_value: Option<u64>,
    pub max_batch_width: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `SYRACUSE_*` overrides from the process environment.
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Applies `SYRACUSE_*` overrides read through `lookup`.
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SYRACUSE_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("SYRACUSE_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("SYRACUSE_PORT is not a valid port: {port}")))?;
        }

        if let Some(log_level) = lookup("SYRACUSE_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        if let Some(value) = lookup("SYRACUSE_MAX_START_VALUE") {
            self.limits.max_start_value = Some(parse_limit("SYRACUSE_MAX_START_VALUE", &value)?);
        }

        if let Some(value) = lookup("SYRACUSE_MAX_BATCH_WIDTH") {
            self.limits.max_batch_width = Some(parse_limit("SYRACUSE_MAX_BATCH_WIDTH", &value)?);
        }

        Ok(())
    }

    /// `host:port` string handed to the listener; host names are resolved at bind time.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_limit(name: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(Error::Config(format!(
            "{name} must be a positive integer, got {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.limits, LimitsConfig::default());
        assert!(config.limits.max_start_value.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r#"
log_level = "debug"

[server]
port = 9000

[limits]
max_batch_width = 500
"#;

        let config = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.limits.max_batch_width, Some(500));
        assert_eq!(config.limits.max_start_value, None);
    }

    #[test]
    fn test_cors_origins_from_toml() {
        let toml_str = r#"
[cors]
allowed_origins = ["http://localhost:3000"]
"#;
        let config = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml_str("[server]\nport = \"abc\""),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::new();
        config
            .merge_env_with(env(&[
                ("SYRACUSE_HOST", "127.0.0.1"),
                ("SYRACUSE_PORT", "8080"),
                ("SYRACUSE_LOG_LEVEL", "trace"),
                ("SYRACUSE_MAX_START_VALUE", "1000000"),
            ]))
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log_level.as_deref(), Some("trace"));
        assert_eq!(config.limits.max_start_value, Some(1_000_000));
        assert_eq!(config.listen_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_env_port() {
        let mut config = Config::new();
        let err = config
            .merge_env_with(env(&[("SYRACUSE_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = Config::new();
        assert!(config
            .merge_env_with(env(&[("SYRACUSE_MAX_BATCH_WIDTH", "0")]))
            .is_err());
    }
}
