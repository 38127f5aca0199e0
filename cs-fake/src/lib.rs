//! Content Store Fake - A verified fake of the messaging content store API.
//!
//! This is a self-contained, in-memory emulation of the content store
//! service's HTTP-level contract: same routing rules, same validation
//! errors, same status codes and body shapes. It lets client code run its
//! tests without a live server or database while staying behaviorally
//! faithful to the real thing.
//!
//! The request pipeline is linear and short-circuiting:
//! auth gate -> router -> resource handler (validate, mutate/read, maybe
//! resolve content) -> response; any failure maps straight to a response
//! through the single error translation point in [`respond`].
//!
//! ```
//! use cs_core::{Method, Request};
//! use cs_fake::FakeContentStoreApi;
//! use serde_json::json;
//!
//! let mut api = FakeContentStoreApi::with_token("secret");
//! let request = Request::new(Method::Post, "/contentstore/schedule/")
//!     .with_body(json!({"minute": "1"}))
//!     .with_token("secret");
//! let response = api.handle_request(&request);
//! assert_eq!(response.code, 201);
//! ```

pub mod api;
pub mod auth;
pub mod resolver;
pub mod resources;
pub mod respond;
pub mod router;
pub mod store;

// Re-export key types
pub use api::FakeContentStoreApi;
pub use store::{ContentStore, Fields, ResourceStore};

// The abstract request/response records the fake speaks.
pub use cs_core::http::{Method, Request, Response};
