use super::*;

#[test]
fn call_constructors_set_method_and_leave_payload_empty() {
    let call = ApiCall::delete("/reviews/5");
    assert_eq!(call.method, Method::Delete);
    assert_eq!(call.path, "/reviews/5");
    assert!(call.query.is_empty());
    assert!(call.body.is_none());
}

#[test]
fn with_json_stores_serialized_body() {
    let call = ApiCall::put("/booking/3/status")
        .with_json(&serde_json::json!({ "status": "confirmed" }))
        .expect("encode");
    assert_eq!(call.body, Some(serde_json::json!({ "status": "confirmed" })));
}

#[test]
fn with_json_reports_unencodable_bodies() {
    let mut map = std::collections::HashMap::new();
    map.insert((1, 2), "tuple keys are not JSON object keys");
    let err = ApiCall::post("/x").with_json(&map).expect_err("should fail");
    assert!(matches!(err, ApiError::Encode(_)));
}

#[test]
fn outbound_header_lookup_ignores_case() {
    let req = OutboundRequest {
        method: Method::Get,
        url: "http://h/api/users".to_owned(),
        headers: vec![("Authorization".to_owned(), "Bearer t".to_owned())],
        query: Vec::new(),
        body: None,
        timeout: Duration::from_secs(1),
    };
    assert_eq!(req.header("authorization"), Some("Bearer t"));
    assert_eq!(req.header("content-type"), None);
}

#[test]
fn response_success_range_is_2xx() {
    assert!(ApiResponse::new(200, "").is_success());
    assert!(ApiResponse::new(204, "").is_success());
    assert!(!ApiResponse::new(304, "").is_success());
    assert!(!ApiResponse::new(401, "").is_success());
}

#[test]
fn response_json_decodes_and_reports_mismatch() {
    let resp = ApiResponse::new(200, r#"{"ticket":"abc"}"#);
    let value: serde_json::Value = resp.json().expect("json");
    assert_eq!(value["ticket"], "abc");

    let bad = ApiResponse::new(200, "<html>");
    assert!(matches!(bad.json::<serde_json::Value>(), Err(ApiError::Decode(_))));
}

#[test]
fn error_message_prefers_message_then_error() {
    let both = ApiResponse::new(400, r#"{"message":"m1","error":"m2"}"#);
    assert_eq!(both.error_message().as_deref(), Some("m1"));
    assert_eq!(ApiResponse::new(400, r#"{"error":"m2"}"#).error_message().as_deref(), Some("m2"));
    assert_eq!(ApiResponse::new(500, "oops").error_message(), None);
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Post.to_string(), "POST");
}

#[test]
fn data_unwraps_envelope_or_accepts_bare_body() {
    let wrapped = ApiResponse::new(200, r#"{"success":true,"data":[1,2,3],"total":3}"#);
    assert_eq!(wrapped.data::<Vec<i32>>().expect("wrapped"), vec![1, 2, 3]);

    let bare = ApiResponse::new(200, "[4,5]");
    assert_eq!(bare.data::<Vec<i32>>().expect("bare"), vec![4, 5]);

    let wrong = ApiResponse::new(200, r#"{"data":"nope"}"#);
    assert!(matches!(wrong.data::<Vec<i32>>(), Err(ApiError::Decode(_))));
}
