use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// HTTP listener and CORS settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    /// TCP port to bind
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
    /// Origins allowed by CORS. A single `"*"` allows any origin.
    #[serde(default = "ServerConfig::default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            allowed_origins: Self::default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        defaults::DEFAULT_HOST.to_string()
    }

    const fn default_port() -> u16 {
        defaults::DEFAULT_PORT
    }

    fn default_allowed_origins() -> Vec<String> {
        vec![defaults::DEFAULT_ALLOWED_ORIGIN.to_string()]
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether CORS should accept any origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.host.trim().is_empty(), "server.host must not be empty");
        ensure!(self.port > 0, "server.port must be greater than 0");
        ensure!(
            !self.allowed_origins.is_empty(),
            "server.allowed_origins must list at least one origin"
        );
        ensure!(
            self.allowed_origins
                .iter()
                .all(|origin| !origin.trim().is_empty()),
            "server.allowed_origins must not contain empty entries"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_development_setup() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_address(), "127.0.0.1:5000");
        assert_eq!(cfg.allowed_origins, vec!["http://localhost:3000"]);
        assert!(!cfg.allows_any_origin());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn wildcard_origin_is_detected() {
        let cfg = ServerConfig {
            allowed_origins: vec!["*".to_string()],
            ..ServerConfig::default()
        };
        assert!(cfg.allows_any_origin());
    }

    #[test]
    fn rejects_port_zero_and_empty_origins() {
        let zero_port = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(zero_port.validate().is_err());

        let no_origins = ServerConfig {
            allowed_origins: Vec::new(),
            ..ServerConfig::default()
        };
        let err = no_origins.validate().unwrap_err();
        assert!(err.to_string().contains("allowed_origins"));
    }
}
