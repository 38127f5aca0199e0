//! Generic keyed in-memory resource storage.
//!
//! A [`ResourceStore`] holds the entities of one resource type as raw JSON
//! maps keyed by id. Working on raw maps rather than typed structs is what
//! makes exact field whitelisting possible: an unknown field in a request
//! body has to be observable, not silently dropped by a deserializer.
//!
//! Ids come from a monotonic counter starting at 1, so iteration order over
//! the backing `BTreeMap` is insertion order. The contract only requires
//! uniqueness; monotonic ids additionally keep tests deterministic and give
//! the stable tie-break the message ordering guarantee needs.

use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::debug;

use cs_core::constants::TIMESTAMP_FORMAT;
use cs_core::error::{CsError, CsResult};

/// Raw field map of one entity.
pub type Fields = Map<String, Value>;

/// Length bound on one string field.
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    /// Bounded field name.
    pub field: &'static str,
    /// Maximum length in characters.
    pub max: usize,
}

/// Keyed in-memory collection for one resource type.
///
/// The store owns whitelist/required/length validation and the mechanical
/// create/get/list/update/delete operations. Cross-entity checks (unique
/// names, reference resolution, content presence) belong to the resource
/// specializations in [`crate::resources`], which run them between
/// validation and mutation. Nothing here ever partially writes: callers
/// validate first, then mutate.
pub struct ResourceStore {
    /// Resource name as it appears in URL paths and error bodies.
    resource: &'static str,
    /// Allowed fields with their default values.
    template: Fields,
    /// Fields that must be present (and non-null) on create.
    required: &'static [&'static str],
    /// Length-bounded fields.
    bounds: &'static [Bound],
    /// Whether the store assigns created_at/updated_at.
    timestamps: bool,
    entities: BTreeMap<u64, Fields>,
    next_id: u64,
}

impl ResourceStore {
    /// Build an empty store.
    ///
    /// `template` must serialize to a JSON object; its keys define the
    /// field whitelist and its values the defaults applied on create.
    pub fn new(
        resource: &'static str,
        template: Value,
        required: &'static [&'static str],
        bounds: &'static [Bound],
        timestamps: bool,
    ) -> Self {
        let template = match template {
            Value::Object(map) => map,
            other => panic!("template for {resource} must be an object, got {other}"),
        };
        Self {
            resource,
            template,
            required,
            bounds,
            timestamps,
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Resource name as used in paths and error messages.
    pub fn resource(&self) -> &'static str {
        self.resource
    }

    /// Reject any submitted field outside the whitelist, reporting every
    /// offender at once.
    pub fn check_fields(&self, fields: &Fields) -> CsResult<()> {
        let mut bad: Vec<String> = fields
            .keys()
            .filter(|k| !self.template.contains_key(*k))
            .cloned()
            .collect();
        if bad.is_empty() {
            Ok(())
        } else {
            bad.sort();
            Err(CsError::UnknownFields {
                resource: self.resource,
                fields: bad,
            })
        }
    }

    /// Reject a create body missing any required field. An explicit null
    /// counts as missing.
    pub fn check_required(&self, fields: &Fields) -> CsResult<()> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|f| fields.get(**f).map(Value::is_null).unwrap_or(true))
            .map(|f| f.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CsError::MissingFields { fields: missing })
        }
    }

    /// Reject any bounded string field exceeding its maximum length.
    pub fn check_bounds(&self, fields: &Fields) -> CsResult<()> {
        for bound in self.bounds {
            if let Some(value) = fields.get(bound.field).and_then(Value::as_str) {
                if value.chars().count() > bound.max {
                    return Err(CsError::FieldTooLong {
                        field: bound.field,
                        max: bound.max,
                    });
                }
            }
        }
        Ok(())
    }

    /// Insert a new entity: template defaults, submitted fields on top,
    /// then the server-assigned id and timestamps. Validation must already
    /// have happened.
    pub fn insert(&mut self, fields: Fields) -> &Fields {
        let id = self.next_id;
        self.next_id += 1;

        let mut entity = self.template.clone();
        for (key, value) in fields {
            entity.insert(key, value);
        }
        entity.insert("id".to_string(), Value::from(id));
        if self.timestamps {
            let now = now_string();
            entity.insert("created_at".to_string(), Value::from(now.clone()));
            entity.insert("updated_at".to_string(), Value::from(now));
        }

        debug!(resource = self.resource, id, "entity created");
        self.entities.insert(id, entity);
        &self.entities[&id]
    }

    /// Look up one entity by id.
    pub fn get(&self, id: u64) -> CsResult<&Fields> {
        self.entities
            .get(&id)
            .ok_or_else(|| CsError::NotFound(format!("{} {id}", self.resource)))
    }

    /// Whether an entity with this id exists.
    pub fn contains(&self, id: u64) -> bool {
        self.entities.contains_key(&id)
    }

    /// All entities in insertion order.
    pub fn list(&self) -> Vec<&Fields> {
        self.entities.values().collect()
    }

    /// Iterate (id, entity) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Fields)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    /// Merge submitted fields into an existing entity and bump its
    /// updated_at. Validation must already have happened.
    pub fn apply_update(&mut self, id: u64, fields: Fields) -> CsResult<&Fields> {
        let resource = self.resource;
        let timestamps = self.timestamps;
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or_else(|| CsError::NotFound(format!("{resource} {id}")))?;
        for (key, value) in fields {
            entity.insert(key, value);
        }
        if timestamps {
            entity.insert("updated_at".to_string(), Value::from(now_string()));
        }
        debug!(resource, id, "entity updated");
        Ok(entity)
    }

    /// Remove an entity, returning it. No referential guard: deleting an
    /// entity other resources still point at is allowed, matching the
    /// observed service.
    pub fn remove(&mut self, id: u64) -> CsResult<Fields> {
        let removed = self
            .entities
            .remove(&id)
            .ok_or_else(|| CsError::NotFound(format!("{} {id}", self.resource)))?;
        debug!(resource = self.resource, id, "entity deleted");
        Ok(removed)
    }
}

/// The four stores of one fake instance.
///
/// Constructed explicitly and injected into [`crate::FakeContentStoreApi`];
/// independent fakes never share state.
pub struct ContentStore {
    pub schedules: ResourceStore,
    pub messagesets: ResourceStore,
    pub messages: ResourceStore,
    pub binarycontents: ResourceStore,
}

impl ContentStore {
    /// Build an empty content store.
    pub fn new() -> Self {
        Self {
            schedules: crate::resources::schedule::store(),
            messagesets: crate::resources::messageset::store(),
            messages: crate::resources::message::store(),
            binarycontents: crate::resources::binary_content::store(),
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC time in the service's timestamp format.
fn now_string() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Read a reference field as an id, if present and non-null.
pub(crate) fn ref_id(fields: &Fields, field: &str) -> Option<Option<u64>> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64()),
    }
}

/// The id of a stored entity. Present on everything a store hands out.
pub(crate) fn id_of(entity: &Fields) -> CsResult<u64> {
    entity
        .get("id")
        .and_then(Value::as_u64)
        .ok_or_else(|| CsError::Internal("stored entity without id".to_string()))
}
