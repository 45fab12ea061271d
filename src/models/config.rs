//! Configuration module for Txport
//!
//! All values come from the environment with sensible defaults; the
//! Etherscan key is never logged.

use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::utils::constants::{DEFAULT_EXPLORER_TIMEOUT_SECS, DEFAULT_EXPORT_DIR};

/// Service configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Etherscan API key (optional; Etherscan throttles keyless requests)
    pub etherscan_api_key: Option<String>,
    /// Directory generated spreadsheets are written to
    pub export_dir: PathBuf,
    /// Timeout for outbound explorer calls
    pub explorer_timeout: Duration,
}

impl ServiceConfig {
    /// Resolve configuration from the environment.
    ///
    /// PORT (the platform convention) wins over TXPORT_PORT for the bind
    /// port; the rest use TXPORT_-prefixed variables.
    pub fn from_env() -> Self {
        let host = std::env::var("TXPORT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .or_else(|_| std::env::var("TXPORT_PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let export_dir = std::env::var("TXPORT_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR));

        let explorer_timeout = std::env::var("TXPORT_EXPLORER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_EXPLORER_TIMEOUT_SECS));

        Self {
            host,
            port,
            etherscan_api_key: Self::get_etherscan_key(),
            export_dir,
            explorer_timeout,
        }
    }

    /// Read the Etherscan API key, rejecting placeholder values.
    /// The key itself is never written to the log.
    fn get_etherscan_key() -> Option<String> {
        match std::env::var("ETHERSCAN_API_KEY") {
            Ok(key) if !key.is_empty() && key != "YOUR_ETHERSCAN_API_KEY" => {
                info!("ETHERSCAN_API_KEY configured (key hidden)");
                Some(key)
            }
            _ => {
                warn!("ETHERSCAN_API_KEY not set - Ethereum lookups will be rate limited");
                None
            }
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            etherscan_api_key: None,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            explorer_timeout: Duration::from_secs(DEFAULT_EXPLORER_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.export_dir, PathBuf::from("exports"));
        assert_eq!(cfg.explorer_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_bind_addr() {
        let cfg = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
