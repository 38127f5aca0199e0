//! Abstract HTTP request/response records.
//!
//! These are transport-free representations of one exchange with the content
//! store API. The fake consumes `Request` and produces `Response` directly;
//! the real HTTP transport maps them onto reqwest calls. Keeping them here
//! means client code is written once against the abstract records and the
//! fake stays bit-compatible with the wire contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants;

/// HTTP methods the content store contract uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Canonical uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representation of one HTTP request to the content store API.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Path including the API prefix and any query string.
    pub path: String,
    /// Parsed JSON body, if any.
    pub body: Option<Value>,
    /// Header map. Keys are used verbatim (no case folding).
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Build a request with no body and no headers.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HashMap::new(),
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Attach the standard `Authorization: Token <token>` header.
    pub fn with_token(self, token: &str) -> Self {
        self.with_header(
            "Authorization",
            format!("{} {token}", constants::AUTH_SCHEME),
        )
    }
}

/// Representation of one HTTP response from the content store API.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Structured body. `Value::Null` for empty-body responses (204, 405).
    pub data: Value,
    /// Serialized body as it would appear on the wire; empty when `data` is null.
    pub body: String,
}

impl Response {
    /// Build a JSON response. The body string is derived from `data`.
    pub fn json(code: u16, data: Value) -> Self {
        let body = data.to_string();
        Self {
            code,
            headers: HashMap::new(),
            data,
            body,
        }
    }

    /// Build a response with no body at all.
    pub fn empty(code: u16) -> Self {
        Self {
            code,
            headers: HashMap::new(),
            data: Value::Null,
            body: String::new(),
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}
