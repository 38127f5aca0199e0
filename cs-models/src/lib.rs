//! Content Store Models - Typed entities of the messaging content store.
//!
//! These structs mirror the service's wire representations exactly: clients
//! deserialize responses into them, and the fake derives each resource's
//! field whitelist and default values by serializing the `Default` value of
//! the matching model, so the two can never drift apart.

pub mod models;

// Re-export key types
pub use models::binary_content::BinaryContent;
pub use models::message::{Message, MessageContent};
pub use models::messageset::{MessageSet, MessageSetMessages};
pub use models::schedule::Schedule;
