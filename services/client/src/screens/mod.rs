//! Screens of the client, one module per view

use tracing::error;

use crate::error::ClientResult;

pub mod admin;
pub mod home;
pub mod login;
pub mod profile;

/// Fall back to an empty value when one of a screen's fetches fails
///
/// Screen sections load independently, so a failing section renders empty
/// and the rest of the screen still shows.
pub(crate) fn or_empty<T: Default>(result: ClientResult<T>, section: &str) -> T {
    result.unwrap_or_else(|e| {
        error!("Error fetching {}: {}", section, e);
        T::default()
    })
}
