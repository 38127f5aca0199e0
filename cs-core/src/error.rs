//! Global error types for the content store crates.
//!
//! Every error the fake or the client can produce is a variant of a single
//! `CsError` enum. The fake's response builder translates each variant into
//! the status code and body shape the real service is documented to emit,
//! so the taxonomy here is the contract surface, not an implementation detail.

use thiserror::Error;

/// Convenience type alias for Results using CsError.
pub type CsResult<T> = Result<T, CsError>;

/// Unified error type covering all error categories in the content store.
#[derive(Error, Debug)]
pub enum CsError {
    // -- Domain validation faults (reported as 400 by the fake) --
    /// Request body carried fields outside the resource's whitelist.
    /// Every offending field is collected, not just the first.
    #[error("invalid {resource} fields: {}", .fields.join(", "))]
    UnknownFields {
        /// Resource name as it appears in paths ("messageset", ...).
        resource: &'static str,
        /// Offending field names, sorted.
        fields: Vec<String>,
    },

    /// One or more create-time required fields were absent.
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields {
        /// Missing field names, sorted.
        fields: Vec<String>,
    },

    /// A message carried neither text_content nor binary_content.
    #[error("one of text_content or binary_content must be supplied")]
    MissingContent,

    /// A bounded string field exceeded its maximum length.
    #[error("field {field} longer than {max} characters")]
    FieldTooLong {
        /// Offending field name.
        field: &'static str,
        /// Maximum permitted length in characters.
        max: usize,
    },

    /// An integer field carried a value that is not an integer.
    #[error("field {field} requires an integer value")]
    InvalidInteger {
        /// Offending field name.
        field: &'static str,
    },

    /// A unique field collided with an existing entity.
    #[error("duplicate value for unique field {field}")]
    DuplicateKey {
        /// Offending field name.
        field: &'static str,
    },

    /// A reference field named an entity that does not exist.
    #[error("field {field} references missing pk {id}")]
    DanglingReference {
        /// Referencing field name.
        field: &'static str,
        /// The value that failed to resolve, rendered for the error body.
        id: String,
    },

    /// A list request carried a filter; no filters are supported.
    #[error("query parameter not supported")]
    InvalidQuery,

    // -- Transport/routing faults --
    /// Authorization header missing or not matching `Token <token>`.
    #[error("invalid token")]
    Forbidden,

    /// Unknown resource type, malformed key, or absent entity.
    #[error("{0} not found")]
    NotFound(String),

    /// Known route, unsupported method.
    #[error("method not allowed")]
    MethodNotAllowed,

    // -- Client-side errors --
    /// The server (real or fake) answered with a non-success status.
    #[error("server error (status {status}): {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// HTTP transport failure before any response arrived.
    #[error("http error: {0}")]
    Http(String),

    // -- Infrastructure --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error, including non-object request bodies.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for CsError {
    fn from(e: serde_json::Error) -> Self {
        CsError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CsError {
    fn from(e: toml::de::Error) -> Self {
        CsError::Config(e.to_string())
    }
}

impl From<std::io::Error> for CsError {
    fn from(e: std::io::Error) -> Self {
        CsError::Config(e.to_string())
    }
}
