//! The auth gate: a single static-token check.
//!
//! Runs before routing, so an unauthenticated request is rejected even when
//! it names a resource type that does not exist.

use tracing::warn;

use cs_core::config::FakeConfig;
use cs_core::constants::AUTH_SCHEME;
use cs_core::error::{CsError, CsResult};
use cs_core::http::Request;

/// Compare the `Authorization` header against the exact `Token <token>`
/// form. Missing header, wrong scheme, and wrong token are all the same
/// failure.
pub fn check(config: &FakeConfig, request: &Request) -> CsResult<()> {
    let expected = format!("{AUTH_SCHEME} {}", config.auth_token);
    match request.headers.get("Authorization") {
        Some(value) if *value == expected => Ok(()),
        _ => {
            warn!(path = %request.path, "request rejected by auth gate");
            Err(CsError::Forbidden)
        }
    }
}
