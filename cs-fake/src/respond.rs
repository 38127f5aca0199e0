//! The error mapper: the single translation point from internal error
//! kinds to externally visible (status, body) pairs.
//!
//! The body shapes reproduce the real service's documented error
//! representations: validation faults are field-keyed lists of messages,
//! auth/lookup faults are `{"detail": ...}` objects, and 405 carries no
//! body at all. An error kind with no mapping here is a defect in the fake
//! and surfaces as a 500 instead of being swallowed.

use serde_json::{json, Map, Value};
use tracing::error;

use cs_core::error::CsError;
use cs_core::http::Response;

/// Translate a domain error into the response the real service would send.
pub fn error_response(err: &CsError) -> Response {
    match err {
        CsError::UnknownFields { resource, fields } => {
            let message = format!("Invalid {resource} fields: {}", fields.join(", "));
            Response::json(400, field_keyed(fields, &message))
        }
        CsError::MissingFields { fields } => {
            Response::json(400, field_keyed(fields, "This field is required."))
        }
        CsError::MissingContent => Response::json(
            400,
            json!({
                "non_field_errors":
                    ["One of text_content or binary_content must be supplied."]
            }),
        ),
        CsError::FieldTooLong { field, max } => Response::json(
            400,
            field_keyed(
                &[field.to_string()],
                &format!("Ensure this field has no more than {max} characters."),
            ),
        ),
        CsError::InvalidInteger { field } => Response::json(
            400,
            field_keyed(&[field.to_string()], "A valid integer is required."),
        ),
        CsError::DuplicateKey { field } => Response::json(
            400,
            field_keyed(&[field.to_string()], "This field must be unique."),
        ),
        CsError::DanglingReference { field, id } => Response::json(
            400,
            field_keyed(
                &[field.to_string()],
                &format!("Invalid pk \"{id}\" - object does not exist."),
            ),
        ),
        CsError::InvalidQuery => {
            Response::json(400, json!({"detail": "query parameter not supported"}))
        }
        CsError::Serialization(message) => Response::json(400, json!({"detail": message})),
        CsError::Forbidden => Response::json(403, json!({"detail": "Invalid token."})),
        CsError::NotFound(_) => Response::json(404, json!({"detail": "Not found."})),
        CsError::MethodNotAllowed => Response::empty(405),
        other => {
            // Outside the contract's taxonomy: a bug in the fake itself.
            error!(error = %other, "error kind without a contract mapping");
            Response::json(500, json!({"detail": format!("fake internal error: {other}")}))
        }
    }
}

/// `{"field": ["message"], ...}` for each named field.
fn field_keyed(fields: &[String], message: &str) -> Value {
    let mut body = Map::new();
    for field in fields {
        body.insert(field.clone(), json!([message]));
    }
    Value::Object(body)
}
