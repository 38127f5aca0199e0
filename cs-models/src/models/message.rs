//! Message entity model and its resolved-content view.

use serde::{Deserialize, Serialize};

use crate::models::binary_content::BinaryContent;

/// One localized content unit within a message set.
///
/// Ordering inside a set is by `sequence_number`, which is not required to
/// be unique. At least one of `text_content`/`binary_content` must be set;
/// the store enforces that invariant on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The message set this message belongs to.
    pub messageset: u64,
    /// Position within the set; ties keep insertion order.
    pub sequence_number: i64,
    /// Locale code, e.g. "eng_ZA".
    pub lang: Option<String>,
    pub text_content: Option<String>,
    /// Bare reference to a BinaryContent entity.
    pub binary_content: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            id: None,
            messageset: 0,
            sequence_number: 0,
            lang: None,
            text_content: None,
            binary_content: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Composite view returned by `GET /message/{id}/content`: the message with
/// its `binary_content` reference expanded to the full entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageContent {
    pub id: u64,
    pub messageset: u64,
    pub sequence_number: i64,
    pub lang: Option<String>,
    pub text_content: Option<String>,
    pub binary_content: Option<BinaryContent>,
    pub created_at: String,
    pub updated_at: String,
}
