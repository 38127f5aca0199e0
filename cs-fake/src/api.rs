//! The fake content store API entry point.
//!
//! One instance owns its configuration and its stores; nothing is shared
//! between instances. A request flows through the linear pipeline
//! auth -> route -> validate/execute -> respond, and any failure
//! short-circuits to a response through [`crate::respond`].
//!
//! `handle_request` takes `&mut self`: the fake is built for sequential use
//! inside a test process, and a caller exposing it to concurrent tasks owns
//! the serialization (the client's fake transport wraps it in one mutex, so
//! uniqueness and reference checks always see a consistent snapshot).

use serde_json::Value;
use tracing::{debug, warn};

use cs_core::config::FakeConfig;
use cs_core::error::{CsError, CsResult};
use cs_core::http::{Request, Response};
use cs_models::Schedule;

use crate::resolver;
use crate::resources::{binary_content, message, messageset, schedule};
use crate::respond;
use crate::router::{self, Operation, Resource, Route};
use crate::store::{id_of, ContentStore, Fields};
use crate::auth;

/// Fake implementation of the content store API.
pub struct FakeContentStoreApi {
    config: FakeConfig,
    /// The backing stores. Public so tests can inspect state directly.
    pub store: ContentStore,
}

impl FakeContentStoreApi {
    /// Build a fake from explicit configuration and stores.
    pub fn new(config: FakeConfig, store: ContentStore) -> Self {
        Self { config, store }
    }

    /// Build an empty fake accepting the given token under the default
    /// URL prefix.
    pub fn with_token(auth_token: impl Into<String>) -> Self {
        Self::new(FakeConfig::with_token(auth_token), ContentStore::new())
    }

    /// The configuration this fake answers under.
    pub fn config(&self) -> &FakeConfig {
        &self.config
    }

    /// Handle one request, start to finish. Never panics on caller input;
    /// every recognized failure maps to the contract's status and body.
    pub fn handle_request(&mut self, request: &Request) -> Response {
        debug!(method = %request.method, path = %request.path, "content store request");
        match self.try_handle(request) {
            Ok(response) => response,
            Err(err) => {
                warn!(method = %request.method, path = %request.path, error = %err,
                      "request failed");
                respond::error_response(&err)
            }
        }
    }

    fn try_handle(&mut self, request: &Request) -> CsResult<Response> {
        auth::check(&self.config, request)?;

        let (path, query) = split_query(strip_origin(&request.path));
        let route = router::route(&self.config.url_path_prefix, request.method, path)?;
        self.execute(route, query, request)
    }

    fn execute(
        &mut self,
        route: Route,
        query: Option<&str>,
        request: &Request,
    ) -> CsResult<Response> {
        // The only supported list filter is no filter at all.
        if route.operation == Operation::List && query.map(|q| !q.is_empty()).unwrap_or(false) {
            return Err(CsError::InvalidQuery);
        }

        match (route.resource, route.operation) {
            // -- Schedule --
            (Resource::Schedule, Operation::Create) => {
                created(schedule::create(&mut self.store, body_fields(request)?)?)
            }
            (Resource::Schedule, Operation::List) => listed_schedules(&self.store.schedules),
            (Resource::Schedule, Operation::Get(id)) => fetched(self.store.schedules.get(id)?),
            (Resource::Schedule, Operation::Update(id)) => {
                updated(schedule::update(&mut self.store, id, body_fields(request)?)?)
            }
            (Resource::Schedule, Operation::Delete(id)) => deleted(self.store.schedules.remove(id)?),

            // -- MessageSet --
            (Resource::MessageSet, Operation::Create) => {
                created(messageset::create(&mut self.store, body_fields(request)?)?)
            }
            (Resource::MessageSet, Operation::List) => listed(&self.store.messagesets),
            (Resource::MessageSet, Operation::Get(id)) => fetched(self.store.messagesets.get(id)?),
            (Resource::MessageSet, Operation::Update(id)) => {
                updated(messageset::update(&mut self.store, id, body_fields(request)?)?)
            }
            (Resource::MessageSet, Operation::Delete(id)) => {
                deleted(self.store.messagesets.remove(id)?)
            }
            (Resource::MessageSet, Operation::View(id, _)) => Ok(Response::json(
                200,
                resolver::resolve_messageset_messages(&self.store, id)?,
            )),

            // -- Message --
            (Resource::Message, Operation::Create) => {
                created(message::create(&mut self.store, body_fields(request)?)?)
            }
            (Resource::Message, Operation::List) => listed(&self.store.messages),
            (Resource::Message, Operation::Get(id)) => fetched(self.store.messages.get(id)?),
            (Resource::Message, Operation::Update(id)) => {
                updated(message::update(&mut self.store, id, body_fields(request)?)?)
            }
            (Resource::Message, Operation::Delete(id)) => deleted(self.store.messages.remove(id)?),
            (Resource::Message, Operation::View(id, _)) => Ok(Response::json(
                200,
                resolver::resolve_message_content(&self.store, id)?,
            )),

            // -- BinaryContent --
            (Resource::BinaryContent, Operation::Create) => {
                created(binary_content::create(&mut self.store, body_fields(request)?)?)
            }
            (Resource::BinaryContent, Operation::List) => listed(&self.store.binarycontents),
            (Resource::BinaryContent, Operation::Get(id)) => {
                fetched(self.store.binarycontents.get(id)?)
            }
            (Resource::BinaryContent, Operation::Update(id)) => updated(binary_content::update(
                &mut self.store,
                id,
                body_fields(request)?,
            )?),
            (Resource::BinaryContent, Operation::Delete(id)) => {
                deleted(self.store.binarycontents.remove(id)?)
            }

            // The router only produces View for messageset and message.
            (Resource::Schedule | Resource::BinaryContent, Operation::View(..)) => Err(
                CsError::Internal("router produced a view on a plain resource".to_string()),
            ),
        }
    }

    // -- Seeding helpers for tests that want state without HTTP traffic --

    /// Create a schedule directly, returning its id.
    pub fn seed_schedule(&mut self, fields: Value) -> CsResult<u64> {
        id_of(&schedule::create(&mut self.store, into_fields(fields)?)?)
    }

    /// Create a message set directly, returning its id.
    pub fn seed_messageset(&mut self, fields: Value) -> CsResult<u64> {
        id_of(&messageset::create(&mut self.store, into_fields(fields)?)?)
    }

    /// Create a message directly, returning its id.
    pub fn seed_message(&mut self, fields: Value) -> CsResult<u64> {
        id_of(&message::create(&mut self.store, into_fields(fields)?)?)
    }

    /// Create a binary content entity directly, returning its id.
    pub fn seed_binarycontent(&mut self, fields: Value) -> CsResult<u64> {
        id_of(&binary_content::create(&mut self.store, into_fields(fields)?)?)
    }
}

/// Clients address a real server by full URL; drop the scheme and host so
/// the same request record routes against the fake.
fn strip_origin(path: &str) -> &str {
    let Some(after_scheme) = path
        .strip_prefix("http://")
        .or_else(|| path.strip_prefix("https://"))
    else {
        return path;
    };
    match after_scheme.find('/') {
        Some(slash) => &after_scheme[slash..],
        None => "/",
    }
}

/// Split a path into (path, query).
fn split_query(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    }
}

/// The request body as a field map. No body counts as an empty map, so the
/// required-field checks produce the contract's 400s; a non-object body is
/// a serialization fault.
fn body_fields(request: &Request) -> CsResult<Fields> {
    match &request.body {
        None => Ok(Fields::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(CsError::Serialization(
            "request body must be a JSON object".to_string(),
        )),
    }
}

fn into_fields(value: Value) -> CsResult<Fields> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CsError::Serialization(
            "seed fields must be a JSON object".to_string(),
        )),
    }
}

fn created(entity: Fields) -> CsResult<Response> {
    Ok(Response::json(201, Value::Object(entity)))
}

fn updated(entity: Fields) -> CsResult<Response> {
    Ok(Response::json(200, Value::Object(entity)))
}

fn fetched(entity: &Fields) -> CsResult<Response> {
    Ok(Response::json(200, Value::Object(entity.clone())))
}

fn listed(store: &crate::store::ResourceStore) -> CsResult<Response> {
    let items: Vec<Value> = store
        .list()
        .into_iter()
        .map(|e| Value::Object(e.clone()))
        .collect();
    Ok(Response::json(200, Value::Array(items)))
}

/// Schedule lists come back in the service's canonical ordering:
/// (month_of_year, day_of_month, day_of_week, hour, minute), not insertion
/// order. The sort is stable, so fully equal schedules keep insertion order.
fn listed_schedules(store: &crate::store::ResourceStore) -> CsResult<Response> {
    let mut schedules = store.list();
    schedules.sort_by_cached_key(|e| {
        serde_json::from_value::<Schedule>(Value::Object((*e).clone()))
            .map(|s| s.ordering_key())
            .unwrap_or_default()
    });
    let items: Vec<Value> = schedules
        .into_iter()
        .map(|e| Value::Object(e.clone()))
        .collect();
    Ok(Response::json(200, Value::Array(items)))
}

fn deleted(_removed: Fields) -> CsResult<Response> {
    Ok(Response::empty(204))
}
