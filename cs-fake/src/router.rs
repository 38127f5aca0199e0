//! Request routing: path and method to a concrete operation.
//!
//! The route table is a closed enumeration. Adding a resource type means
//! adding a `Resource` variant and the compiler points at every match that
//! needs extending; there is no string-keyed handler table to forget.

use cs_core::error::{CsError, CsResult};
use cs_core::http::Method;

/// The resource types the content store exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Schedule,
    MessageSet,
    Message,
    BinaryContent,
}

impl Resource {
    /// Match a path segment to a resource type.
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "schedule" => Some(Resource::Schedule),
            "messageset" => Some(Resource::MessageSet),
            "message" => Some(Resource::Message),
            "binarycontent" => Some(Resource::BinaryContent),
            _ => None,
        }
    }

    /// The path segment this resource lives under.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Schedule => "schedule",
            Resource::MessageSet => "messageset",
            Resource::Message => "message",
            Resource::BinaryContent => "binarycontent",
        }
    }

    /// Whether PATCH is part of this resource's contract. binarycontent
    /// only takes PUT.
    fn allows_patch(&self) -> bool {
        !matches!(self, Resource::BinaryContent)
    }
}

/// Composite-view sub-actions appended to an entity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubAction {
    /// `/messageset/{id}/messages`
    Messages,
    /// `/message/{id}/content`
    Content,
}

/// One fully routed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get(u64),
    Update(u64),
    Delete(u64),
    View(u64, SubAction),
}

/// A parsed and method-dispatched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub resource: Resource,
    pub operation: Operation,
}

/// Parse `path` (prefix stripped, query already removed) and dispatch on
/// `method`.
///
/// Unknown resource types, malformed keys, and trailing garbage are
/// `NotFound`; a known route with an unsupported method is
/// `MethodNotAllowed`. POST anywhere below the collection level is
/// `MethodNotAllowed` before the key is even looked at, matching the
/// observed service.
pub fn route(prefix: &str, method: Method, path: &str) -> CsResult<Route> {
    let prefix = prefix.trim_end_matches('/');
    let rest = path
        .strip_prefix(prefix)
        .ok_or_else(|| CsError::NotFound(format!("path {path} outside prefix {prefix}")))?;

    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let Some((&type_segment, key_segments)) = segments.split_first() else {
        return Err(CsError::NotFound("empty path".to_string()));
    };
    let resource = Resource::from_segment(type_segment)
        .ok_or_else(|| CsError::NotFound(format!("resource type {type_segment}")))?;

    let operation = match key_segments {
        [] => match method {
            Method::Post => Operation::Create,
            Method::Get => Operation::List,
            _ => return Err(CsError::MethodNotAllowed),
        },
        _ if method == Method::Post => return Err(CsError::MethodNotAllowed),
        [key] => {
            let id = parse_key(resource, key)?;
            match method {
                Method::Get => Operation::Get(id),
                Method::Put => Operation::Update(id),
                Method::Patch if resource.allows_patch() => Operation::Update(id),
                Method::Delete => Operation::Delete(id),
                _ => return Err(CsError::MethodNotAllowed),
            }
        }
        [key, sub] => {
            let sub_action = match (resource, *sub) {
                (Resource::MessageSet, "messages") => SubAction::Messages,
                (Resource::Message, "content") => SubAction::Content,
                _ => {
                    return Err(CsError::NotFound(format!(
                        "sub-action {sub} on {}",
                        resource.name()
                    )))
                }
            };
            if method != Method::Get {
                return Err(CsError::MethodNotAllowed);
            }
            Operation::View(parse_key(resource, key)?, sub_action)
        }
        _ => return Err(CsError::NotFound(format!("path {path}"))),
    };

    Ok(Route {
        resource,
        operation,
    })
}

/// Keys are numeric ids; anything else can never match an entity.
fn parse_key(resource: Resource, key: &str) -> CsResult<u64> {
    key.parse::<u64>()
        .map_err(|_| CsError::NotFound(format!("{} {key}", resource.name())))
}
