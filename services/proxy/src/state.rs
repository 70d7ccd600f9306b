//! Application state shared across handlers

use std::path::PathBuf;

use crate::{config::ProxyConfig, upstream::UpstreamClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Build the state from the proxy configuration
    pub fn from_config(config: &ProxyConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            upstream: UpstreamClient::new(&config.api_url, config.request_timeout())?,
            static_dir: config.static_dir.clone(),
        })
    }
}
