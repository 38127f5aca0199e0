//! Integration tests for the transport-level contract: the auth gate,
//! routing, method dispatch, and error body shapes.

mod common;

use serde_json::json;

use common::*;
use cs_core::{Method, Request};

// ---- Auth gate ----

#[test]
fn any_request_without_token_fails_403() {
    let mut api = api();
    let response = api.handle_request(&Request::new(Method::Get, "/contentstore/schedule/"));
    assert_eq!(response.code, 403);
    assert_eq!(response.data, json!({"detail": "Invalid token."}));
}

#[test]
fn wrong_token_fails_403_on_every_method() {
    let mut api = api();
    for method in [Method::Get, Method::Post, Method::Put, Method::Delete] {
        let request = Request::new(method, "/contentstore/messageset/").with_token("wrong");
        assert_eq!(api.handle_request(&request).code, 403);
    }
}

#[test]
fn auth_runs_before_routing_even_for_unknown_resource_types() {
    let mut api = api();
    // Unauthenticated: 403, not 404.
    let response = api.handle_request(&Request::new(Method::Get, "/contentstore/nonsense/"));
    assert_eq!(response.code, 403);
    // Authenticated: now the router gets to say 404.
    let response = api.handle_request(&get("/contentstore/nonsense/"));
    assert_eq!(response.code, 404);
    assert_eq!(response.data, json!({"detail": "Not found."}));
}

// ---- Routing and method dispatch ----

#[test]
fn post_to_an_entity_path_fails_405_with_empty_body() {
    let mut api = api();
    let response = api.handle_request(&post("/contentstore/schedule/1/", json!({})));
    assert_eq!(response.code, 405);
    assert!(response.body.is_empty());
}

#[test]
fn unsupported_method_on_view_fails_405() {
    let mut api = api();
    let set = seed_messageset(&mut api, "set");
    let path = format!("/contentstore/messageset/{set}/messages");
    let response = api.handle_request(&delete(&path));
    assert_eq!(response.code, 405);
}

#[test]
fn patch_on_binarycontent_fails_405_but_put_succeeds() {
    let mut api = api();
    let blob = api
        .seed_binarycontent(json!({"content": "aGk=", "filename": "a.mp3"}))
        .unwrap();
    let path = format!("/contentstore/binarycontent/{blob}/");

    let response = api.handle_request(&patch(&path, json!({"filename": "b.mp3"})));
    assert_eq!(response.code, 405);

    let response = api.handle_request(&put(&path, json!({"filename": "b.mp3"})));
    assert_eq!(response.code, 200);
    assert_eq!(response.data["filename"], json!("b.mp3"));
}

#[test]
fn get_on_missing_entity_fails_404() {
    let mut api = api();
    let response = api.handle_request(&get("/contentstore/schedule/999/"));
    assert_eq!(response.code, 404);
}

#[test]
fn non_numeric_key_fails_404() {
    let mut api = api();
    let response = api.handle_request(&get("/contentstore/schedule/abc/"));
    assert_eq!(response.code, 404);
}

#[test]
fn path_outside_configured_prefix_fails_404() {
    let mut api = api();
    let response = api.handle_request(&get("/otherapp/schedule/"));
    assert_eq!(response.code, 404);
}

#[test]
fn custom_prefix_is_honored() {
    let mut api = cs_fake::FakeContentStoreApi::new(
        cs_core::FakeConfig {
            url_path_prefix: "/api/v2/content".into(),
            auth_token: TOKEN.into(),
        },
        cs_fake::ContentStore::new(),
    );
    let response = api.handle_request(&post("/api/v2/content/schedule/", json!({})));
    assert_eq!(response.code, 201);
    let response = api.handle_request(&get("/contentstore/schedule/"));
    assert_eq!(response.code, 404);
}

// ---- List filters ----

#[test]
fn list_with_query_parameter_fails_400() {
    let mut api = api();
    let response = api.handle_request(&get("/contentstore/messageset/?query=foo"));
    assert_eq!(response.code, 400);
    assert_eq!(response.data, json!({"detail": "query parameter not supported"}));
}

#[test]
fn get_by_id_ignores_query_string() {
    let mut api = api();
    let schedule = seed_schedule(&mut api);
    let response = api.handle_request(&get(&format!("/contentstore/schedule/{schedule}/?x=1")));
    assert_eq!(response.code, 200);
}

// ---- Body handling ----

#[test]
fn non_object_body_fails_400() {
    let mut api = api();
    let response = api.handle_request(&post("/contentstore/schedule/", json!(["not", "a", "map"])));
    assert_eq!(response.code, 400);
}

#[test]
fn unknown_fields_reported_together_and_sorted() {
    let mut api = api();
    let response = api.handle_request(&post(
        "/contentstore/messageset/",
        json!({"zebra": 1, "alpha": 2}),
    ));
    assert_field_error(&response, "alpha", "Invalid messageset fields: alpha, zebra");
    assert_field_error(&response, "zebra", "Invalid messageset fields: alpha, zebra");
}
