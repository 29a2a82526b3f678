//! Client-side session store fed by the auth token.

use std::sync::{Mutex, PoisonError};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::domain::auth::{AuthenticatedUser, Claims};
use crate::gateway::SessionSink;

struct SessionEntry {
    token: String,
    user: AuthenticatedUser,
}

/// Holds the current access token and the identity decoded from it.
///
/// The token payload is decoded without signature verification; the server
/// remains the authority on whether the token is actually accepted.
#[derive(Default)]
pub struct Session {
    current: Mutex<Option<SessionEntry>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearer token for authenticated requests, if signed in.
    pub fn token(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|entry| entry.token.clone())
    }

    pub fn user(&self) -> Option<AuthenticatedUser> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|entry| entry.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Signs out, dropping the stored token.
    pub fn clear(&self) {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

fn decode_claims(access_token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(access_token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

impl SessionSink for Session {
    fn set_user_from_token(&self, access_token: &str) {
        match decode_claims(access_token) {
            Ok(claims) => {
                let entry = SessionEntry {
                    token: access_token.to_string(),
                    user: AuthenticatedUser::from(claims),
                };
                self.current
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .replace(entry);
            }
            Err(err) => {
                // A malformed token leaves the session unchanged.
                log::error!("Failed to decode access token: {err}");
            }
        }
    }
}
