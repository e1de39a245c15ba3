//! Server configuration
//!
//! `ServerConfig` is built once at startup from environment variables and
//! is immutable afterwards.
//!
//! # Environment Variables
//!
//! - `PORT`: Listen port (default: 3002)
//! - `HOST`: Bind address (default: 0.0.0.0)

use std::env;

use thiserror::Error;

/// Listen port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3002;

/// Bind address used when `HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration errors detected at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': must be an integer between 0 and 65535")]
    InvalidPort(String),
}

/// Runtime server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Build a config from raw variable values, applying defaults for
    /// unset or empty ones.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match port.filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// `host:port` string suitable for `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:3002");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = ServerConfig::from_vars(Some(String::new()), Some("  ".to_string())).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_custom_port_and_host() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1".to_string()), Some("8080".to_string()))
                .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_vars(None, Some("http".to_string())).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));

        assert!(ServerConfig::from_vars(None, Some("70000".to_string())).is_err());
    }
}
