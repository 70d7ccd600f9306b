//! Client configuration
//!
//! Defaults overridden by `DEUS_*` environment variables
//! (`DEUS_BASE_URL`, `DEUS_TOKEN_FILE`).

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Origin of the proxy relay
    pub base_url: String,
    /// File holding the bearer token between invocations
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Create a new ClientConfig from defaults and environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("base_url", "http://localhost:8080")?
            .set_default("token_file", ".deus-token")?
            .add_source(Environment::with_prefix("DEUS"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_client_config_from_env() {
        // SAFETY: tests touching the environment are serialized
        unsafe {
            std::env::remove_var("DEUS_TOKEN_FILE");
            std::env::set_var("DEUS_BASE_URL", "http://proxy.test:8080");
        }

        let config = ClientConfig::from_env().expect("Failed to create client config");
        // SAFETY: see above
        unsafe { std::env::remove_var("DEUS_BASE_URL") };

        assert_eq!(config.base_url, "http://proxy.test:8080");
        assert_eq!(config.token_file, PathBuf::from(".deus-token"));
    }
}
