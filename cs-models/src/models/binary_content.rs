//! BinaryContent entity model.

use base64::Engine;
use serde::{Deserialize, Serialize};

use cs_core::error::{CsError, CsResult};

/// An opaque stored blob referenced by messages.
///
/// The blob travels as a base64 `content` string. `filename` is kept from
/// the upload so clients can recover an extension for content-type
/// inference; `extension` is derived server-side and only present on the
/// expanded representation inside composite views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Base64-encoded blob.
    pub content: String,
    /// Original upload filename.
    pub filename: String,
    /// Derived extension, set when the entity is expanded in a view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Default for BinaryContent {
    fn default() -> Self {
        Self {
            id: None,
            content: String::new(),
            filename: String::new(),
            extension: None,
        }
    }
}

impl BinaryContent {
    /// Derive the extension from a filename: the text after the last dot.
    pub fn extension_of(filename: &str) -> Option<&str> {
        match filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Decode the base64 blob back into raw bytes.
    pub fn decode(&self) -> CsResult<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.content)
            .map_err(|e| CsError::Serialization(format!("invalid base64 content: {e}")))
    }

    /// Encode raw bytes into the wire `content` representation.
    pub fn encode(bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }
}
