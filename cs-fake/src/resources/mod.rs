//! Resource specializations.
//!
//! One module per resource type. Each declares the store for its entities
//! (field whitelist, defaults, create-time requireds, length bounds) and
//! wraps the generic store operations with its own cross-entity checks.
//! Checks always run in the same order: whitelist, requireds, bounds, then
//! cross-entity, and only then does anything touch storage.

pub mod binary_content;
pub mod message;
pub mod messageset;
pub mod schedule;

use serde_json::Value;

use cs_core::error::{CsError, CsResult};

use crate::store::{Fields, ResourceStore};

/// Templates are built by serializing the `Default` value of the matching
/// cs-models type, so whitelist and model cannot drift apart.
fn template_of<T: Default + serde::Serialize>() -> Value {
    serde_json::to_value(T::default()).expect("entity models serialize to objects")
}

/// Check that a reference field, when supplied, resolves in `target`.
fn check_reference(
    fields: &Fields,
    field: &'static str,
    target: &ResourceStore,
) -> CsResult<()> {
    match crate::store::ref_id(fields, field) {
        // Field absent or null: nothing to resolve.
        None => Ok(()),
        Some(Some(id)) if target.contains(id) => Ok(()),
        Some(resolved) => Err(CsError::DanglingReference {
            field,
            id: match resolved {
                Some(id) => id.to_string(),
                None => fields[field].to_string(),
            },
        }),
    }
}
