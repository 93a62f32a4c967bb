//! Web server configuration.

use crate::error::{Result, WebError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Hard deadline for each domain-load phase, in milliseconds. Absent
    /// means unbounded: a slow provider stalls its whole batch.
    pub load_timeout_ms: Option<u64>,
    /// Extra directory of static files served under `/static`.
    pub static_dir: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            load_timeout_ms: None,
            static_dir: None,
        }
    }
}

impl WebConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(WebError::Io)?;
        toml::from_str(&raw).map_err(|e| WebError::Config(format!("invalid config file: {e}")))
    }

    pub fn load_timeout(&self) -> Option<Duration> {
        self.load_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost() {
        let config = WebConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.load_timeout(), None);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: WebConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn timeout_is_parsed_as_duration() {
        let config: WebConfig = toml::from_str("load_timeout_ms = 250").unwrap();
        assert_eq!(config.load_timeout(), Some(Duration::from_millis(250)));
    }
}
