//! Read-only profile listing.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::Profile;

/// Base path of the profile endpoints.
pub const PROFILES_URL: &str = "/api/profiles";

/// Fetch every user profile visible to the current identity.
pub async fn list() -> Result<Vec<Profile>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = super::http::with_bearer(gloo_net::http::Request::get(PROFILES_URL))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::resource_error(
                resp.status(),
                super::http::failure_message(resp).await,
            ));
        }
        super::http::read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("no browser transport".to_owned()))
    }
}
