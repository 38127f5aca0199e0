//! Content Store Core - Foundation types shared by the fake server and the client.
//!
//! This crate provides the pieces every other content store crate builds on:
//! - The unified error type covering validation, routing, and transport faults
//! - Configuration for the fake server and for clients
//! - Structured logging with tracing
//! - Abstract HTTP request/response records (no real transport attached)
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ClientConfig, FakeConfig};
pub use error::{CsError, CsResult};
pub use http::{Method, Request, Response};
pub use logging::init_console_logging;
