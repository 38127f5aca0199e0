//! Schedule resource specialization.
//!
//! Schedules have no cross-entity checks and no required fields: every
//! field defaults to the wildcard and is stored verbatim as a string.

use cs_core::error::CsResult;
use cs_models::Schedule;

use crate::store::{ContentStore, Fields, ResourceStore};

/// Path segment and error-body name of this resource.
pub const RESOURCE: &str = "schedule";

/// Build the schedule store.
pub fn store() -> ResourceStore {
    ResourceStore::new(RESOURCE, super::template_of::<Schedule>(), &[], &[], false)
}

/// Create a schedule.
pub fn create(store: &mut ContentStore, fields: Fields) -> CsResult<Fields> {
    store.schedules.check_fields(&fields)?;
    Ok(store.schedules.insert(fields).clone())
}

/// Update a schedule.
pub fn update(store: &mut ContentStore, id: u64, fields: Fields) -> CsResult<Fields> {
    store.schedules.get(id)?;
    store.schedules.check_fields(&fields)?;
    Ok(store.schedules.apply_update(id, fields)?.clone())
}
