//! Custom error types for the client

use common::error::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Message shown when the login call is rejected
pub const LOGIN_FAILED: &str = "Login failed! Please check your credentials.";

/// Message shown when the admin form is rejected
pub const ADD_MOVIE_FAILED: &str = "Failed to add movie. Please check the inputs.";

/// Custom error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    /// No usable session, the user has to sign in
    #[error("Not signed in, run `deus login` first")]
    NotSignedIn,

    /// Signed in without the admin claim
    #[error("Admin access required")]
    AdminOnly,

    #[error("{}", LOGIN_FAILED)]
    LoginFailed,

    #[error("{}", ADD_MOVIE_FAILED)]
    AddMovieFailed,

    /// Movie not found on the requested page
    #[error("Movie {0} not found on this page")]
    MovieNotFound(uuid::Uuid),

    /// Input rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Relay answered with an error status
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// Transport or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token file could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;
