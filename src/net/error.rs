#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Every way a remote call can fail, as a distinguishable kind.
///
/// Nothing in this crate retries. Callers decide what a failure means for
/// the in-memory state, usually: leave it alone and show the message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The auth endpoint refused a login, signup, or password change.
    #[error("{0}")]
    AuthRejected(String),
    /// An operation that needs a stored credential ran without one.
    #[error("not signed in")]
    Unauthenticated,
    /// The service rejected the attached credential.
    #[error("session expired or invalid")]
    Unauthorized,
    /// No resource with the requested id.
    #[error("not found")]
    NotFound,
    /// Transport-level failure; no response arrived.
    #[error("network failure: {0}")]
    Network(String),
    /// The service reported an internal failure.
    #[error("server error (status {0})")]
    Server(u16),
    /// A JSON body could not be encoded or decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Any other non-success status.
    #[error("request failed (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Map a non-2xx status from a resource endpoint to an error kind.
pub fn resource_error(status: u16, message: String) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        500..=599 => ApiError::Server(status),
        _ => ApiError::Rejected { status, message },
    }
}

/// Map a non-2xx status from an auth endpoint to an error kind.
///
/// Bad credentials and validation failures both come back as
/// `AuthRejected` carrying the server's message; only 5xx is split out.
pub fn auth_error(status: u16, message: String) -> ApiError {
    match status {
        500..=599 => ApiError::Server(status),
        _ => ApiError::AuthRejected(message),
    }
}
