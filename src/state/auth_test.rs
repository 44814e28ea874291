use futures::executor::block_on;

use super::*;
use crate::net::request::ApiResponse;
use crate::net::session::{SessionStore, TOKEN_KEY, USER_INFO_KEY};
use crate::net::testing::Harness;
use crate::net::types::UserRole;

const LOGIN_BODY: &str = r#"{
    "access_token": "tok-9",
    "refresh_token": "ref-9",
    "user": { "id": 9, "name": "Nora", "account": "nora", "role": "student" },
    "token_type": "Bearer",
    "expires_in": 3600
}"#;

fn credentials() -> Credentials {
    Credentials { account: "nora".to_owned(), password: "pw123456".to_owned() }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.logged_in);
}

#[test]
fn auth_state_mirrors_session() {
    let h = Harness::new();
    assert_eq!(AuthState::from_session(h.gateway.session()), AuthState::default());

    h.store.set(TOKEN_KEY, "t");
    let state = AuthState::from_session(h.gateway.session());
    assert!(state.logged_in);
    assert!(state.user.is_none());
}

// =============================================================
// sign_in / sign_out
// =============================================================

#[test]
fn sign_in_stores_token_and_profile() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(200, LOGIN_BODY)));

    let user = block_on(sign_in(&h.gateway, &credentials())).expect("login");

    assert_eq!(user.role, UserRole::Student);
    assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("tok-9"));
    assert_eq!(h.gateway.session().user(), Some(user));
}

#[test]
fn sign_in_with_bad_credentials_expires_session() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(401, r#"{"error":"Invalid credentials"}"#)));

    let err = block_on(sign_in(&h.gateway, &credentials())).expect_err("401");

    assert_eq!(err.user_message(), "Invalid credentials");
    assert!(h.store.is_empty());
    assert_eq!(h.expired.get(), 1);
}

#[test]
fn sign_in_with_unexpected_body_leaves_session_untouched() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(200, r#"{"message":"ok"}"#)));

    let err = block_on(sign_in(&h.gateway, &credentials())).expect_err("decode");

    assert!(matches!(err, ApiError::Decode(_)));
    assert!(h.store.is_empty());
}

#[test]
fn sign_out_clears_session_even_when_server_fails() {
    let h = Harness::new();
    h.store.set(TOKEN_KEY, "t");
    h.store.set(USER_INFO_KEY, "{}");
    h.transport.reply(Ok(ApiResponse::new(500, "")));

    let result = block_on(sign_out(&h.gateway));

    assert!(matches!(result, Err(ApiError::Server(_))));
    assert!(h.store.is_empty());
    assert_eq!(h.expired.get(), 0);
}

#[test]
fn sign_out_sends_bearer_before_clearing() {
    let h = Harness::new();
    h.store.set(TOKEN_KEY, "t-out");

    block_on(sign_out(&h.gateway)).expect("logout");

    assert_eq!(h.transport.only_request().header("Authorization"), Some("Bearer t-out"));
    assert!(h.store.is_empty());
}
