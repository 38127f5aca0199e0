//! MessageSet resource specialization.
//!
//! Cross-entity checks: `short_name` must be unique across all message sets
//! (ignoring the set being updated), and `default_schedule` must resolve to
//! an existing schedule. `next_set` chains are deliberately unchecked, even
//! for cycles, matching the observed service.

use serde_json::Value;

use cs_core::constants::SHORT_NAME_MAX_CHARS;
use cs_core::error::{CsError, CsResult};
use cs_models::MessageSet;

use crate::store::{Bound, ContentStore, Fields, ResourceStore};

/// Path segment and error-body name of this resource.
pub const RESOURCE: &str = "messageset";

const REQUIRED: &[&str] = &["short_name", "default_schedule"];
const BOUNDS: &[Bound] = &[Bound {
    field: "short_name",
    max: SHORT_NAME_MAX_CHARS,
}];

/// Build the messageset store.
pub fn store() -> ResourceStore {
    ResourceStore::new(
        RESOURCE,
        super::template_of::<MessageSet>(),
        REQUIRED,
        BOUNDS,
        true,
    )
}

/// Create a message set.
pub fn create(store: &mut ContentStore, fields: Fields) -> CsResult<Fields> {
    store.messagesets.check_fields(&fields)?;
    store.messagesets.check_required(&fields)?;
    store.messagesets.check_bounds(&fields)?;
    check_short_name_unique(&store.messagesets, &fields, None)?;
    super::check_reference(&fields, "default_schedule", &store.schedules)?;
    Ok(store.messagesets.insert(fields).clone())
}

/// Update a message set. Uniqueness excludes the set itself, so updating a
/// set without changing its name (or to a still-unique name) succeeds.
pub fn update(store: &mut ContentStore, id: u64, fields: Fields) -> CsResult<Fields> {
    store.messagesets.get(id)?;
    store.messagesets.check_fields(&fields)?;
    store.messagesets.check_bounds(&fields)?;
    check_short_name_unique(&store.messagesets, &fields, Some(id))?;
    super::check_reference(&fields, "default_schedule", &store.schedules)?;
    Ok(store.messagesets.apply_update(id, fields)?.clone())
}

fn check_short_name_unique(
    messagesets: &ResourceStore,
    fields: &Fields,
    exclude: Option<u64>,
) -> CsResult<()> {
    let Some(short_name) = fields.get("short_name").and_then(Value::as_str) else {
        return Ok(());
    };
    let collision = messagesets.iter().any(|(id, entity)| {
        Some(id) != exclude && entity.get("short_name").and_then(Value::as_str) == Some(short_name)
    });
    if collision {
        Err(CsError::DuplicateKey {
            field: "short_name",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().unwrap().clone()
    }

    fn store_with_schedule() -> (ContentStore, u64) {
        let mut store = ContentStore::new();
        let schedule = crate::resources::schedule::create(&mut store, Fields::new()).unwrap();
        let id = schedule["id"].as_u64().unwrap();
        (store, id)
    }

    #[test]
    fn test_create_fills_defaults_and_timestamps() {
        let (mut store, schedule) = store_with_schedule();
        let set = create(
            &mut store,
            fields(json!({"short_name": "Full Set", "default_schedule": schedule})),
        )
        .unwrap();
        assert_eq!(set["next_set"], Value::Null);
        assert_eq!(set["notes"], Value::Null);
        assert!(set["created_at"].is_string());
    }

    #[test]
    fn test_missing_default_schedule_is_required_error() {
        let mut store = ContentStore::new();
        let err = create(&mut store, fields(json!({"short_name": "s"}))).unwrap_err();
        match err {
            CsError::MissingFields { fields } => {
                assert_eq!(fields, vec!["default_schedule".to_string()])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_default_schedule_rejected() {
        let mut store = ContentStore::new();
        let err = create(
            &mut store,
            fields(json!({"short_name": "s", "default_schedule": 42})),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CsError::DanglingReference {
                field: "default_schedule",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_short_name_rejected() {
        let (mut store, schedule) = store_with_schedule();
        create(
            &mut store,
            fields(json!({"short_name": "dup", "default_schedule": schedule})),
        )
        .unwrap();
        let err = create(
            &mut store,
            fields(json!({"short_name": "dup", "default_schedule": schedule})),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CsError::DuplicateKey {
                field: "short_name"
            }
        ));
    }

    #[test]
    fn test_update_keeping_own_short_name_succeeds() {
        let (mut store, schedule) = store_with_schedule();
        let set = create(
            &mut store,
            fields(json!({"short_name": "mine", "default_schedule": schedule})),
        )
        .unwrap();
        let id = set["id"].as_u64().unwrap();

        let updated = update(
            &mut store,
            id,
            fields(json!({"short_name": "mine", "notes": "still me"})),
        )
        .unwrap();
        assert_eq!(updated["notes"], json!("still me"));
    }

    #[test]
    fn test_update_to_taken_short_name_rejected() {
        let (mut store, schedule) = store_with_schedule();
        create(
            &mut store,
            fields(json!({"short_name": "first", "default_schedule": schedule})),
        )
        .unwrap();
        let second = create(
            &mut store,
            fields(json!({"short_name": "second", "default_schedule": schedule})),
        )
        .unwrap();
        let id = second["id"].as_u64().unwrap();

        let err = update(&mut store, id, fields(json!({"short_name": "first"}))).unwrap_err();
        assert!(matches!(err, CsError::DuplicateKey { .. }));
    }

    #[test]
    fn test_short_name_length_bound() {
        let (mut store, schedule) = store_with_schedule();
        let err = create(
            &mut store,
            fields(json!({
                "short_name": "a".repeat(21),
                "default_schedule": schedule
            })),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CsError::FieldTooLong {
                field: "short_name",
                max: 20
            }
        ));
    }

    #[test]
    fn test_next_set_chain_is_never_checked() {
        let (mut store, schedule) = store_with_schedule();
        // Pointing at a nonexistent set, and later at itself, both pass.
        let set = create(
            &mut store,
            fields(json!({
                "short_name": "chained",
                "default_schedule": schedule,
                "next_set": 999
            })),
        )
        .unwrap();
        let id = set["id"].as_u64().unwrap();
        update(&mut store, id, fields(json!({"next_set": id}))).unwrap();
    }
}
