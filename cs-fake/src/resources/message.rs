//! Message resource specialization.
//!
//! Cross-entity checks: the `messageset` and `binary_content` references
//! must resolve when supplied, and the message must carry content. The
//! content invariant holds against the post-merge entity on update, so an
//! update clearing both content fields is rejected too.

use cs_core::error::{CsError, CsResult};
use cs_models::Message;

use crate::store::{ContentStore, Fields, ResourceStore};

/// Path segment and error-body name of this resource.
pub const RESOURCE: &str = "message";

const REQUIRED: &[&str] = &["messageset", "sequence_number"];

/// Build the message store.
pub fn store() -> ResourceStore {
    ResourceStore::new(
        RESOURCE,
        super::template_of::<Message>(),
        REQUIRED,
        &[],
        true,
    )
}

/// Create a message.
pub fn create(store: &mut ContentStore, fields: Fields) -> CsResult<Fields> {
    store.messages.check_fields(&fields)?;
    store.messages.check_required(&fields)?;
    check_sequence_number(&fields)?;
    check_content_present(&fields)?;
    super::check_reference(&fields, "messageset", &store.messagesets)?;
    super::check_reference(&fields, "binary_content", &store.binarycontents)?;
    Ok(store.messages.insert(fields).clone())
}

/// Update a message.
pub fn update(store: &mut ContentStore, id: u64, fields: Fields) -> CsResult<Fields> {
    let current = store.messages.get(id)?.clone();
    store.messages.check_fields(&fields)?;
    check_sequence_number(&fields)?;

    let mut merged = current;
    for (key, value) in &fields {
        merged.insert(key.clone(), value.clone());
    }
    check_content_present(&merged)?;
    super::check_reference(&fields, "messageset", &store.messagesets)?;
    super::check_reference(&fields, "binary_content", &store.binarycontents)?;
    Ok(store.messages.apply_update(id, fields)?.clone())
}

/// Ordering depends on `sequence_number` being a real integer; anything
/// else (strings included) is rejected rather than stored and mis-sorted.
fn check_sequence_number(fields: &Fields) -> CsResult<()> {
    match fields.get("sequence_number") {
        None | Some(serde_json::Value::Null) => Ok(()),
        Some(value) if value.is_i64() || value.is_u64() => Ok(()),
        Some(_) => Err(CsError::InvalidInteger {
            field: "sequence_number",
        }),
    }
}

/// At least one of text_content/binary_content must be present and non-null.
fn check_content_present(fields: &Fields) -> CsResult<()> {
    let has = |field: &str| fields.get(field).map(|v| !v.is_null()).unwrap_or(false);
    if has("text_content") || has("binary_content") {
        Ok(())
    } else {
        Err(CsError::MissingContent)
    }
}
