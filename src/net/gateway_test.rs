use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::net::session::{SessionStore, TOKEN_KEY, USER_INFO_KEY};
use crate::net::testing::Harness;

fn logged_in(h: &Harness, token: &str) {
    h.store.set(TOKEN_KEY, token);
    h.store.set(USER_INFO_KEY, r#"{"id":1,"name":"A","account":"a","role":"student"}"#);
}

// =============================================================
// Outbound interception
// =============================================================

#[test]
fn attaches_bearer_token_when_logged_in() {
    let h = Harness::new();
    logged_in(&h, "tok-123");

    block_on(h.gateway.send(ApiCall::get("/users"))).expect("ok");

    let req = h.transport.only_request();
    assert_eq!(req.header("Authorization"), Some("Bearer tok-123"));
}

#[test]
fn sends_unauthenticated_without_token() {
    let h = Harness::new();

    block_on(h.gateway.send(ApiCall::get("/course/list"))).expect("ok");

    let req = h.transport.only_request();
    assert_eq!(req.header("Authorization"), None);
}

#[test]
fn always_sends_default_content_type_and_timeout() {
    let h = Harness::new();
    block_on(h.gateway.send(ApiCall::post("/auth/logout"))).expect("ok");

    let req = h.transport.only_request();
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.timeout, Duration::from_millis(10_000));
    assert_eq!(req.url, "http://127.0.0.1:5000/api/auth/logout");
}

#[test]
fn token_is_read_at_send_time() {
    let h = Harness::new();
    logged_in(&h, "first");
    block_on(h.gateway.send(ApiCall::get("/users"))).expect("ok");
    h.gateway.session().set("second", None);
    block_on(h.gateway.send(ApiCall::get("/users"))).expect("ok");

    let sent = h.transport.sent();
    assert_eq!(sent[0].header("Authorization"), Some("Bearer first"));
    assert_eq!(sent[1].header("Authorization"), Some("Bearer second"));
}

#[test]
fn prepare_serializes_json_body() {
    let h = Harness::new();
    let call = ApiCall::post("/reviews/create")
        .with_json(&serde_json::json!({ "rating": "5" }))
        .expect("encode");
    let req = h.gateway.prepare(call).expect("prepare");
    assert_eq!(req.body.as_deref(), Some(r#"{"rating":"5"}"#));
}

// =============================================================
// Inbound interception
// =============================================================

#[test]
fn unauthorized_clears_session_and_fires_callback_once() {
    let h = Harness::new();
    logged_in(&h, "stale");
    h.transport.reply(Ok(ApiResponse::new(401, r#"{"msg":"Token has expired"}"#)));

    let err = block_on(h.gateway.send(ApiCall::get("/auth/me"))).expect_err("401");

    let expired = ApiResponse::new(401, r#"{"msg":"Token has expired"}"#);
    assert_eq!(err, ApiError::Unauthorized(expired));
    assert_eq!(h.store.get(TOKEN_KEY), None);
    assert_eq!(h.store.get(USER_INFO_KEY), None);
    assert_eq!(h.expired.get(), 1);
}

#[test]
fn unauthorized_without_session_still_fires_callback() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(401, "")));

    let _ = block_on(h.gateway.send(ApiCall::post("/auth/login")));

    assert!(h.store.is_empty());
    assert_eq!(h.expired.get(), 1);
}

#[test]
fn each_unauthorized_response_fires_its_own_callback() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(401, "")));
    h.transport.reply(Ok(ApiResponse::new(401, "")));

    let _ = block_on(h.gateway.send(ApiCall::get("/users")));
    let _ = block_on(h.gateway.send(ApiCall::get("/users")));

    assert_eq!(h.expired.get(), 2);
}

#[test]
fn other_statuses_pass_through_and_leave_storage_alone() {
    for status in [400_u16, 403, 404, 409, 422, 500, 502, 503] {
        let h = Harness::new();
        logged_in(&h, "keep");
        let response = ApiResponse::new(status, r#"{"error":"nope"}"#);
        h.transport.reply(Ok(response.clone()));

        let err = block_on(h.gateway.send(ApiCall::get("/booking/list"))).expect_err("non-2xx");

        assert_eq!(err.response(), Some(&response), "status {status}");
        assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("keep"));
        assert!(h.store.get(USER_INFO_KEY).is_some());
        assert_eq!(h.expired.get(), 0);
    }
}

#[test]
fn transport_failures_pass_through_and_leave_storage_alone() {
    let h = Harness::new();
    logged_in(&h, "keep");
    h.transport.reply(Err(TransportError::Network("connection refused".to_owned())));
    h.transport.reply(Err(TransportError::Timeout(Duration::from_millis(10_000))));

    let first = block_on(h.gateway.send(ApiCall::get("/users"))).expect_err("network");
    let second = block_on(h.gateway.send(ApiCall::get("/users"))).expect_err("timeout");

    assert_eq!(first, ApiError::Network("connection refused".to_owned()));
    assert_eq!(second, ApiError::Timeout(Duration::from_millis(10_000)));
    assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("keep"));
    assert_eq!(h.expired.get(), 0);
}

#[test]
fn success_returns_response_unmodified() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(201, r#"{"message":"ok"}"#)));

    let resp = block_on(h.gateway.send(ApiCall::post("/auth/register"))).expect("created");

    assert_eq!(resp, ApiResponse::new(201, r#"{"message":"ok"}"#));
}

#[test]
fn no_retry_after_failure() {
    let h = Harness::new();
    h.transport.reply(Ok(ApiResponse::new(503, "")));

    let _ = block_on(h.gateway.send(ApiCall::get("/teacher/all")));

    assert_eq!(h.transport.sent().len(), 1);
}
