#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in user, as carried in the credential's claims.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Claims in the credential's payload segment.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenClaims {
    pub user: User,
    /// Unix expiry time in seconds. Absent means non-expiring.
    #[serde(default)]
    pub exp: Option<i64>,
}

/// A single blog post as exchanged with the service.
///
/// Server-assigned fields the client does not model (author, timestamps,
/// comments) ride along in `extra` so a full-body update does not drop
/// them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub text: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Caller-supplied fields for creating a post. The service validates them
/// and assigns everything else.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFields {
    pub title: String,
    pub category: String,
    pub text: String,
}

/// A user profile from the profile listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Successful auth responses carry a fresh credential.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error envelope the service attaches to rejections.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Best-effort human-readable message for a failed response.
    pub fn text(self, status: u16) -> String {
        self.err
            .or(self.message)
            .unwrap_or_else(|| format!("status {status}"))
    }
}
