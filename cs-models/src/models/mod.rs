//! Entity models matching the content store wire format.

pub mod binary_content;
pub mod message;
pub mod messageset;
pub mod schedule;
