//! BinaryContent resource specialization.
//!
//! The blob arrives base64-encoded in the `content` field together with the
//! original `filename`; both are required on create. The derived extension
//! is computed at view-resolution time, never stored.

use cs_core::error::CsResult;
use cs_models::BinaryContent;

use crate::store::{ContentStore, Fields, ResourceStore};

/// Path segment and error-body name of this resource.
pub const RESOURCE: &str = "binarycontent";

const REQUIRED: &[&str] = &["content", "filename"];

/// Build the binarycontent store.
pub fn store() -> ResourceStore {
    ResourceStore::new(
        RESOURCE,
        super::template_of::<BinaryContent>(),
        REQUIRED,
        &[],
        false,
    )
}

/// Create a binary content entity.
pub fn create(store: &mut ContentStore, fields: Fields) -> CsResult<Fields> {
    store.binarycontents.check_fields(&fields)?;
    store.binarycontents.check_required(&fields)?;
    Ok(store.binarycontents.insert(fields).clone())
}

/// Update a binary content entity.
pub fn update(store: &mut ContentStore, id: u64, fields: Fields) -> CsResult<Fields> {
    store.binarycontents.get(id)?;
    store.binarycontents.check_fields(&fields)?;
    Ok(store.binarycontents.apply_update(id, fields)?.clone())
}
