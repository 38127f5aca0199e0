//! Configuration for the fake server and for API clients.
//!
//! Both configs are plain serde structs loadable from TOML, with every field
//! defaulted so a partial (or empty) document is valid. Nothing here touches
//! the network; the client transport decides what to do with the values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::CsResult;

/// Configuration for a fake content store instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FakeConfig {
    /// URL path prefix the API is mounted under (e.g. "/contentstore").
    #[serde(default = "default_url_prefix")]
    pub url_path_prefix: String,

    /// The single static token the auth gate accepts.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            url_path_prefix: default_url_prefix(),
            auth_token: String::new(),
        }
    }
}

impl FakeConfig {
    /// Build a config with the given token and the default prefix.
    pub fn with_token(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            ..Self::default()
        }
    }

    /// Parse a config from a TOML document.
    pub fn from_toml_str(doc: &str) -> CsResult<Self> {
        Ok(toml::from_str(doc)?)
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: &Path) -> CsResult<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

/// Configuration for a content store API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the API, prefix included (e.g. "http://testserver/contentstore").
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Access token sent as `Authorization: Token <token>`.
    #[serde(default)]
    pub auth_token: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_token: String::new(),
            api_timeout_ms: default_api_timeout(),
        }
    }
}

impl ClientConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(doc: &str) -> CsResult<Self> {
        Ok(toml::from_str(doc)?)
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: &Path) -> CsResult<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// The API url with any trailing slash removed, ready for path joining.
    pub fn api_root(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

fn default_url_prefix() -> String {
    constants::DEFAULT_URL_PREFIX.to_string()
}

fn default_api_url() -> String {
    format!("http://testserver{}", constants::DEFAULT_URL_PREFIX)
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}
