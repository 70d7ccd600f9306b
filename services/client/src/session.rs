//! Session handling for the bearer token issued at login
//!
//! The token is decoded locally without verifying its signature: only the
//! upstream can vouch for it, the client merely reads the `is_admin` claim
//! to pick a landing screen and the `exp` claim to drop stale sessions.

use std::{fs, io::ErrorKind, path::PathBuf};

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::{error::ClientResult, router::View};

/// Claims read from the access token
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub exp: Option<u64>,
}

/// Signed-in user session
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    claims: Claims,
}

impl Session {
    /// Decode a token, failing when it is malformed or expired
    pub fn from_token(token: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_aud = false;
        validation.validate_exp = true;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;

        Ok(Self {
            token: token.to_string(),
            claims: data.claims,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_admin(&self) -> bool {
        self.claims.is_admin
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Screen shown right after signing in
    pub fn landing(&self) -> View {
        if self.is_admin() { View::Admin } else { View::Home }
    }
}

/// Token file standing in for browser storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored session
    ///
    /// A missing file, or a token that no longer decodes, yields `None`.
    pub fn load(&self) -> ClientResult<Option<Session>> {
        let token = match fs::read_to_string(&self.path) {
            Ok(token) => token,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }

        match Session::from_token(token) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!("Ignoring stored token: {}", e);
                Ok(None)
            }
        }
    }

    /// Persist a freshly issued token
    pub fn save(&self, token: &str) -> ClientResult<Session> {
        let session = Session::from_token(token).map_err(|e| {
            warn!("Received an unreadable token: {}", e);
            crate::error::ClientError::LoginFailed
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        info!("Session stored in {}", self.path.display());

        Ok(session)
    }

    /// Forget the stored token
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn token(claims: Value) -> String {
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"upstream-secret"))
            .expect("Failed to encode token")
    }

    fn now() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    #[test]
    fn admin_claim_selects_admin_landing() {
        let session =
            Session::from_token(&token(json!({"user_id": 1, "is_admin": true, "exp": now() + 600})))
                .unwrap();
        assert!(session.is_admin());
        assert_eq!(session.landing(), View::Admin);

        let session = Session::from_token(&token(json!({"user_id": 2, "exp": now() + 600}))).unwrap();
        assert!(!session.is_admin());
        assert_eq!(session.landing(), View::Home);
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired = token(json!({"is_admin": false, "exp": now() - 3600}));
        assert!(Session::from_token(&expired).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(Session::from_token("not-a-token").is_err());
    }

    #[test]
    fn store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("token"));
        assert!(store.load().unwrap().is_none());

        let issued = token(json!({"is_admin": false, "exp": now() + 600}));
        store.save(&issued).unwrap();
        assert_eq!(store.load().unwrap().unwrap().token(), issued);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn stale_stored_token_counts_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, token(json!({"exp": now() - 3600}))).unwrap();

        assert!(SessionStore::new(path).load().unwrap().is_none());
    }
}
