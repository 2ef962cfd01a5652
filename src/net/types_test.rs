use super::*;

// =============================================================
// Blog wire shape
// =============================================================

#[test]
fn blog_keeps_server_assigned_fields() {
    let json = r#"{
        "_id": "1",
        "title": "Hi",
        "category": "News",
        "text": "body",
        "author": { "name": "Ada" },
        "createdAt": "2024-01-01T00:00:00Z"
    }"#;
    let blog: Blog = serde_json::from_str(json).unwrap();

    assert_eq!(blog.id, "1");
    assert_eq!(blog.title, "Hi");
    assert!(blog.extra.contains_key("author"));
    assert!(blog.extra.contains_key("createdAt"));
}

#[test]
fn blog_round_trips_with_extras_intact() {
    let json = r#"{"_id":"1","title":"Hi","category":"News","text":"body","author":{"name":"Ada"}}"#;
    let blog: Blog = serde_json::from_str(json).unwrap();
    let back = serde_json::to_value(&blog).unwrap();

    assert_eq!(back["_id"], "1");
    assert_eq!(back["author"]["name"], "Ada");
}

#[test]
fn blog_fields_serialize_to_the_create_payload() {
    let fields = BlogFields {
        title: "Hi".to_owned(),
        category: "News".to_owned(),
        text: "body".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&fields).unwrap(),
        serde_json::json!({ "title": "Hi", "category": "News", "text": "body" })
    );
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn change_password_uses_the_service_field_names() {
    let body = ChangePasswordRequest {
        old_password: "old".to_owned(),
        new_password: "new".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "oldPassword": "old", "newPassword": "new" })
    );
}

#[test]
fn user_id_maps_from_mongo_underscore_id() {
    let user: User =
        serde_json::from_str(r#"{"_id":"u1","name":"Ada","email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.id, "u1");
}

#[test]
fn profile_photo_is_optional() {
    let profile: Profile = serde_json::from_str(r#"{"_id":"p1","name":"Ada"}"#).unwrap();
    assert!(profile.photo.is_none());
}

// =============================================================
// Error envelope
// =============================================================

#[test]
fn api_message_prefers_err_then_message() {
    let both = ApiMessage {
        err: Some("bad".to_owned()),
        message: Some("ignored".to_owned()),
    };
    assert_eq!(both.text(400), "bad");

    let only_message = ApiMessage {
        err: None,
        message: Some("fallback".to_owned()),
    };
    assert_eq!(only_message.text(400), "fallback");

    assert_eq!(ApiMessage::default().text(418), "status 418");
}
