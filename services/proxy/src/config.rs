//! Proxy configuration
//!
//! Values come from built-in defaults overridden by `PROXY_*` environment
//! variables, e.g. `PROXY_API_URL`, `PROXY_PORT` or `PROXY_STATIC_DIR`.

use std::{path::PathBuf, time::Duration};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Upstream rent-store origin used when `PROXY_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://3.235.214.44:8000";

/// Proxy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Origin of the upstream REST API, without a trailing path
    pub api_url: String,
    /// Interface to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Upper bound on a single upstream call
    pub request_timeout_secs: u64,
    /// Directory holding the built frontend bundle, served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl ProxyConfig {
    /// Create a new ProxyConfig from defaults and environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("request_timeout_secs", 30)?
            .add_source(Environment::with_prefix("PROXY").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PROXY_API_URL",
            "PROXY_HOST",
            "PROXY_PORT",
            "PROXY_REQUEST_TIMEOUT_SECS",
            "PROXY_STATIC_DIR",
        ] {
            // SAFETY: tests touching the environment are serialized
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_proxy_config_defaults() {
        clear_env();
        let config = ProxyConfig::from_env().expect("Failed to create proxy config");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.static_dir.is_none());
    }

    #[test]
    #[serial]
    fn test_proxy_config_from_env() {
        clear_env();
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::set_var("PROXY_API_URL", "http://upstream.test:9000");
            std::env::set_var("PROXY_PORT", "3100");
            std::env::set_var("PROXY_STATIC_DIR", "dist");
        }

        let config = ProxyConfig::from_env().expect("Failed to create proxy config");
        clear_env();

        assert_eq!(config.api_url, "http://upstream.test:9000");
        assert_eq!(config.port, 3100);
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }
}
