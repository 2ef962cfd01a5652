use super::*;

// =============================================================
// Resource endpoints
// =============================================================

#[test]
fn rejected_credential_reads_as_unauthorized() {
    assert_eq!(
        resource_error(401, "Unauthorized".to_owned()),
        ApiError::Unauthorized
    );
    assert_eq!(
        resource_error(403, "Forbidden".to_owned()),
        ApiError::Unauthorized
    );
}

#[test]
fn missing_resource_reads_as_not_found() {
    assert_eq!(
        resource_error(404, "Not Found".to_owned()),
        ApiError::NotFound
    );
}

#[test]
fn five_hundreds_read_as_server_faults() {
    assert_eq!(
        resource_error(500, "boom".to_owned()),
        ApiError::Server(500)
    );
    assert_eq!(
        resource_error(503, "later".to_owned()),
        ApiError::Server(503)
    );
}

#[test]
fn residual_statuses_keep_the_message() {
    assert_eq!(
        resource_error(422, "title is required".to_owned()),
        ApiError::Rejected {
            status: 422,
            message: "title is required".to_owned(),
        }
    );
}

// =============================================================
// Auth endpoints
// =============================================================

#[test]
fn auth_rejection_carries_the_server_message() {
    assert_eq!(
        auth_error(401, "Invalid credentials".to_owned()),
        ApiError::AuthRejected("Invalid credentials".to_owned())
    );
    assert_eq!(
        auth_error(400, "Email already taken".to_owned()),
        ApiError::AuthRejected("Email already taken".to_owned())
    );
}

#[test]
fn auth_server_fault_is_not_a_rejection() {
    assert_eq!(auth_error(500, "boom".to_owned()), ApiError::Server(500));
}

// =============================================================
// Display
// =============================================================

#[test]
fn messages_are_user_presentable() {
    assert_eq!(ApiError::Unauthenticated.to_string(), "not signed in");
    assert_eq!(
        ApiError::AuthRejected("Invalid credentials".to_owned()).to_string(),
        "Invalid credentials"
    );
    assert_eq!(ApiError::Server(502).to_string(), "server error (status 502)");
}
