//! Identity service: credential decoding and the auth endpoint calls.
//!
//! The credential is a JWT issued by the service. The client never checks
//! the signature; it only decodes the payload claims to derive the
//! current user, and treats anything undecodable or expired as signed out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::error::ApiError;
use super::types::{TokenClaims, User};
use crate::util::token_store;

/// Base path of the authentication endpoints.
pub const AUTH_URL: &str = "/api/auth";

/// Decode the payload claims of a credential.
///
/// `None` for anything other than a well-formed three-segment token whose
/// payload parses into claims.
fn decode_claims(token: &str) -> Option<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}

/// Derive the user identity carried by a credential.
///
/// `now` is the current Unix time in seconds; an `exp` claim at or before
/// it means the session is over. A token without `exp` never expires.
pub(crate) fn user_from_token(token: &str, now: i64) -> Option<User> {
    let claims = decode_claims(token)?;
    match claims.exp {
        Some(exp) if exp <= now => None,
        _ => Some(claims.user),
    }
}

/// Current Unix time in seconds.
#[cfg(feature = "csr")]
fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Current Unix time in seconds.
#[cfg(not(feature = "csr"))]
fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() as i64)
}

/// The signed-in user derived from the stored credential, if any.
///
/// Absent storage, malformed tokens, and expired tokens all read as "not
/// signed in"; none of them are errors.
pub fn current_user() -> Option<User> {
    let token = token_store::read()?;
    user_from_token(&token, now_secs())
}

/// Store a fresh credential and derive its identity.
#[cfg(feature = "csr")]
fn adopt_token(token: &str) -> Result<User, ApiError> {
    token_store::write(token);
    user_from_token(token, now_secs())
        .ok_or_else(|| ApiError::Decode("credential claims".to_owned()))
}

/// Sign in with an email and password.
///
/// On success the returned credential replaces whatever the store held and
/// the decoded identity comes back. A rejected attempt leaves the store
/// untouched.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = super::types::LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{AUTH_URL}/login"))
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::auth_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        let fresh: super::types::TokenResponse = super::http::read_json(resp).await?;
        adopt_token(&fresh.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Create an account. Same credential handling as `login`.
pub async fn signup(name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = super::types::SignupRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{AUTH_URL}/signup"))
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::auth_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        let fresh: super::types::TokenResponse = super::http::read_json(resp).await?;
        adopt_token(&fresh.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Rotate the account password.
///
/// Requires a stored credential (attached as the bearer header);
/// `Unauthenticated` without one. Success rotates the stored credential
/// and returns the refreshed identity.
pub async fn change_password(old_password: &str, new_password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        if token_store::read().is_none() {
            return Err(ApiError::Unauthenticated);
        }
        let body = super::types::ChangePasswordRequest {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        let resp = super::http::with_bearer(gloo_net::http::Request::post(&format!(
            "{AUTH_URL}/change-password"
        )))
        .json(&body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::auth_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        let fresh: super::types::TokenResponse = super::http::read_json(resp).await?;
        adopt_token(&fresh.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (old_password, new_password);
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}

/// Sign out. Purely local: drop the stored credential. Idempotent.
pub fn logout() {
    token_store::clear();
}
