//! Login screen

use common::validation::validate_credentials;
use tracing::{info, warn};

use crate::{
    api::RentStoreApi,
    error::{ClientError, ClientResult},
    router::View,
    session::{Session, SessionStore},
};

/// Sign in and store the issued token
///
/// Returns the session together with the screen to navigate to.
pub async fn login(
    api: &RentStoreApi,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> ClientResult<(Session, View)> {
    let credentials = validate_credentials(username, password)?;
    info!("Login attempt for user: {}", credentials.username);

    let response = api.login(&credentials).await.map_err(|e| {
        warn!("Login rejected: {}", e);
        ClientError::LoginFailed
    })?;

    let session = store.save(&response.access)?;
    let landing = View::resolve(View::Login.path(), Some(&session));
    Ok((session, landing))
}

/// Sign out, returning to the login screen
pub fn logout(store: &SessionStore) -> ClientResult<View> {
    store.clear()?;
    info!("Signed out");
    Ok(View::Login)
}
