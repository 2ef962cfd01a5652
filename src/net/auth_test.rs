use super::*;

fn token_for(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

fn claims(exp: Option<i64>) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "user": { "_id": "u1", "name": "Ada", "email": "ada@example.com" }
    });
    if let Some(exp) = exp {
        payload["exp"] = serde_json::json!(exp);
    }
    payload
}

// =============================================================
// Well-formed credentials
// =============================================================

#[test]
fn decodes_a_well_formed_token() {
    let user = user_from_token(&token_for(&claims(Some(2_000))), 1_000).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn token_without_exp_never_expires() {
    assert!(user_from_token(&token_for(&claims(None)), i64::MAX).is_some());
}

#[test]
fn expiry_is_inclusive() {
    let token = token_for(&claims(Some(1_000)));
    assert!(user_from_token(&token, 999).is_some());
    assert!(user_from_token(&token, 1_000).is_none());
    assert!(user_from_token(&token, 1_001).is_none());
}

// =============================================================
// Malformed credentials read as signed out
// =============================================================

#[test]
fn wrong_segment_count_is_rejected() {
    assert!(user_from_token("", 0).is_none());
    assert!(user_from_token("only-one-segment", 0).is_none());
    assert!(user_from_token("two.segments", 0).is_none());
    assert!(user_from_token("four.whole.segments.here", 0).is_none());
}

#[test]
fn non_base64_payload_is_rejected() {
    assert!(user_from_token("header.$$$not-base64$$$.signature", 0).is_none());
}

#[test]
fn non_json_payload_is_rejected() {
    let payload = URL_SAFE_NO_PAD.encode("definitely not json");
    assert!(user_from_token(&format!("h.{payload}.s"), 0).is_none());
}

#[test]
fn payload_without_a_user_is_rejected() {
    let token = token_for(&serde_json::json!({ "exp": 9_999 }));
    assert!(user_from_token(&token, 0).is_none());
}
