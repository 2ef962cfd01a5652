use super::*;

fn ada() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
    }
}

#[test]
fn starts_signed_out() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.signed_in());
}

#[test]
fn sign_in_makes_the_guard_pass() {
    let mut state = SessionState::default();
    state.sign_in(ada());
    assert!(state.signed_in());
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn sign_out_drops_the_identity() {
    let mut state = SessionState::default();
    state.sign_in(ada());
    state.sign_out();
    assert!(!state.signed_in());
}

#[test]
fn sign_out_is_idempotent() {
    let mut once = SessionState::default();
    once.sign_out();

    let mut twice = SessionState::default();
    twice.sign_out();
    twice.sign_out();

    assert_eq!(once, twice);
    assert_eq!(once, SessionState::default());
}

#[test]
fn restore_without_a_browser_is_signed_out() {
    assert!(!SessionState::restore().signed_in());
}
