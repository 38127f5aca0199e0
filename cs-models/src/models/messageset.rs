//! MessageSet entity model and its composite messages view.

use serde::{Deserialize, Serialize};

use crate::models::message::MessageContent;

/// A named collection of ordered messages sharing a default delivery schedule.
///
/// `next_set` forms an optional forward chain to another message set. The
/// service never checks the chain for cycles; neither do we.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique name, at most 20 characters.
    pub short_name: String,
    pub notes: Option<String>,
    /// Optional forward chain to another message set.
    pub next_set: Option<u64>,
    /// Reference to the Schedule delivery defaults to.
    pub default_schedule: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Default for MessageSet {
    fn default() -> Self {
        Self {
            id: None,
            short_name: String::new(),
            notes: None,
            next_set: None,
            default_schedule: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Composite view returned by `GET /messageset/{id}/messages`: the message
/// set's own fields plus every attached message, content expanded, sorted
/// ascending by sequence number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSetMessages {
    pub id: u64,
    pub short_name: String,
    pub notes: Option<String>,
    pub next_set: Option<u64>,
    pub default_schedule: u64,
    pub created_at: String,
    pub updated_at: String,
    pub messages: Vec<MessageContent>,
}
