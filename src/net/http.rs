//! Shared HTTP plumbing: bearer attachment and response handling.
//!
//! Everything here needs a browser transport, so the whole module is
//! compiled only with the `csr` feature; the per-endpoint modules carry
//! native stubs instead.

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ApiMessage;
use crate::util::token_store;

/// Attach the stored credential, if any, as a bearer authorization header.
pub(crate) fn with_bearer(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token_store::read() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Read a successful response body as `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the service's error envelope out of a failed response.
pub(crate) async fn failure_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<ApiMessage>().await {
        Ok(msg) => msg.text(status),
        Err(_) => format!("status {status}"),
    }
}
