//! Custom error types for the proxy service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::ValidationError;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamError;

/// Fixed body returned when a relayed call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// `{"type":"error","message":"error"}`
    Generic,
    FetchingRentals,
    ReturningMovie,
    AddingFunds,
    /// `{"message":"Error adding movie"}`, without the `type` field
    AddingMovie,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Failure::Generic => "error",
            Failure::FetchingRentals => "Error fetching rentals",
            Failure::ReturningMovie => "Error returning movie",
            Failure::AddingFunds => "Error adding funds",
            Failure::AddingMovie => "Error adding movie",
        }
    }

    pub fn body(self) -> Value {
        match self {
            Failure::AddingMovie => json!({ "message": self.message() }),
            _ => json!({ "type": "error", "message": self.message() }),
        }
    }
}

/// Custom error type for the proxy service
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Deposit rejected before reaching the upstream
    #[error("Invalid deposit amount")]
    InvalidDeposit,

    /// Request body could not be read
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Relayed call failed
    #[error("{}: {source}", .failure.message())]
    Upstream {
        failure: Failure,
        #[source]
        source: UpstreamError,
    },
}

impl ProxyError {
    pub fn upstream(failure: Failure) -> impl FnOnce(UpstreamError) -> Self {
        move |source| ProxyError::Upstream { failure, source }
    }
}

impl From<ValidationError> for ProxyError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidDeposit => ProxyError::InvalidDeposit,
            other => ProxyError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ProxyError::InvalidDeposit => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Invalid deposit amount" }),
            ),
            ProxyError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            ProxyError::Upstream { failure, source } => {
                error!("{}: {}", failure.message(), source);
                (StatusCode::INTERNAL_SERVER_ERROR, failure.body())
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for proxy results
pub type ProxyResult<T> = Result<T, ProxyError>;
