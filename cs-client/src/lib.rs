//! Content Store Client - Typed client for the messaging content store API.
//!
//! One method per route of the service, with responses deserialized into the
//! cs-models types. The client is generic over a [`Transport`]: production
//! code uses [`HttpTransport`] against a live server, tests use
//! [`FakeTransport`] against the in-memory verified fake and exercise the
//! exact same client code.

pub mod client;
pub mod transport;

// Re-export key types
pub use client::ContentStoreClient;
pub use transport::{FakeTransport, HttpTransport, Transport};
