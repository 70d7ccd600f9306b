//! HTTP client for the upstream rent-store API

use std::time::Duration;

use axum::http::{
    HeaderValue, Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Error raised while talking to the upstream API
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection, timeout or protocol failure
    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a status the route does not accept
    #[error("Upstream answered with status {0}")]
    UnexpectedStatus(StatusCode),

    /// Upstream body is not JSON
    #[error("Upstream body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Status a route requires from the upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Exactly `200 OK`
    Ok,
    /// Exactly `201 Created`
    Created,
    /// Any 2xx status
    Success,
}

impl Expect {
    pub fn accepts(self, status: StatusCode) -> bool {
        match self {
            Expect::Ok => status == StatusCode::OK,
            Expect::Created => status == StatusCode::CREATED,
            Expect::Success => status.is_success(),
        }
    }
}

/// Upstream API client
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client for the given upstream origin
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute upstream URL for `path`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a JSON request, forwarding the caller's authorization if any
    pub fn request(
        &self,
        method: Method,
        path: &str,
        authorization: Option<&HeaderValue>,
    ) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization.clone());
        }

        builder
    }

    /// Send a request and decode the JSON body when the status is accepted
    ///
    /// An empty body decodes to `null`.
    pub async fn send(&self, builder: RequestBuilder, expect: Expect) -> Result<Value, UpstreamError> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !expect.accepts(status) {
            debug!(%status, body = %String::from_utf8_lossy(&bytes), "Rejected upstream response");
            return Err(UpstreamError::UnexpectedStatus(status));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_matches_statuses() {
        assert!(Expect::Ok.accepts(StatusCode::OK));
        assert!(!Expect::Ok.accepts(StatusCode::CREATED));
        assert!(Expect::Created.accepts(StatusCode::CREATED));
        assert!(!Expect::Created.accepts(StatusCode::OK));
        assert!(Expect::Success.accepts(StatusCode::CREATED));
        assert!(Expect::Success.accepts(StatusCode::NO_CONTENT));
        assert!(!Expect::Success.accepts(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = UpstreamClient::new("http://upstream.test:8000/", Duration::from_secs(1))
            .expect("Failed to build client");
        assert_eq!(
            client.url("/rent-store/movies/"),
            "http://upstream.test:8000/rent-store/movies/"
        );
    }
}
