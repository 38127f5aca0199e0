//! Shared helpers for the fake's integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

use cs_core::{Method, Request, Response};
use cs_fake::FakeContentStoreApi;

/// Token every test fake accepts.
pub const TOKEN: &str = "testtoken";

/// A fresh fake under the default prefix.
pub fn api() -> FakeContentStoreApi {
    cs_core::init_console_logging("warn");
    FakeContentStoreApi::with_token(TOKEN)
}

pub fn get(path: &str) -> Request {
    Request::new(Method::Get, path).with_token(TOKEN)
}

pub fn post(path: &str, body: Value) -> Request {
    Request::new(Method::Post, path).with_body(body).with_token(TOKEN)
}

pub fn put(path: &str, body: Value) -> Request {
    Request::new(Method::Put, path).with_body(body).with_token(TOKEN)
}

pub fn patch(path: &str, body: Value) -> Request {
    Request::new(Method::Patch, path).with_body(body).with_token(TOKEN)
}

pub fn delete(path: &str) -> Request {
    Request::new(Method::Delete, path).with_token(TOKEN)
}

/// POST and assert 201, returning the created entity.
pub fn create(api: &mut FakeContentStoreApi, path: &str, body: Value) -> Value {
    let response = api.handle_request(&post(path, body));
    assert_eq!(response.code, 201, "create failed: {}", response.body);
    response.data
}

/// Seed one schedule, returning its id.
pub fn seed_schedule(api: &mut FakeContentStoreApi) -> u64 {
    api.seed_schedule(json!({})).unwrap()
}

/// Seed one schedule and one message set on it, returning the set id.
pub fn seed_messageset(api: &mut FakeContentStoreApi, short_name: &str) -> u64 {
    let schedule = seed_schedule(api);
    api.seed_messageset(json!({
        "short_name": short_name,
        "default_schedule": schedule
    }))
    .unwrap()
}

/// Id of an entity in a response body.
pub fn id_of(entity: &Value) -> u64 {
    entity["id"].as_u64().expect("entity id")
}

/// Assert a field-keyed 400 body carries the given message under the field.
pub fn assert_field_error(response: &Response, field: &str, message: &str) {
    assert_eq!(response.code, 400, "body: {}", response.body);
    let messages = response.data[field]
        .as_array()
        .unwrap_or_else(|| panic!("no {field} key in {}", response.body));
    assert!(
        messages.iter().any(|m| m == message),
        "no {message:?} under {field} in {}",
        response.body
    );
}
