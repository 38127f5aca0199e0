//! Content resolution: the two composite read views.
//!
//! Resolution expands bare `binary_content` references into the full
//! BinaryContent entity (with its derived extension) and assembles the
//! per-set message list, sorted ascending by sequence number. The sort is
//! stable and the input is in insertion order, so equal sequence numbers
//! keep their insertion order.

use serde_json::Value;

use cs_core::error::CsResult;
use cs_models::BinaryContent;

use crate::store::{ContentStore, Fields};

/// Resolve one message's content: the message's own fields with
/// `binary_content` expanded, everything else passed through unchanged.
pub fn resolve_message_content(store: &ContentStore, message_id: u64) -> CsResult<Value> {
    let message = store.messages.get(message_id)?.clone();
    Ok(Value::Object(expand_binary(store, message)?))
}

/// Resolve a message set's full message list: the set's own fields plus a
/// `messages` array of expanded messages sorted by `sequence_number`.
pub fn resolve_messageset_messages(store: &ContentStore, messageset_id: u64) -> CsResult<Value> {
    let mut view = store.messagesets.get(messageset_id)?.clone();

    let mut messages: Vec<Fields> = Vec::new();
    for (_, entity) in store.messages.iter() {
        if entity.get("messageset").and_then(Value::as_u64) == Some(messageset_id) {
            messages.push(expand_binary(store, entity.clone())?);
        }
    }
    // Stable sort; insertion order breaks sequence-number ties.
    messages.sort_by_key(|m| m.get("sequence_number").and_then(Value::as_i64).unwrap_or(0));

    view.insert(
        "messages".to_string(),
        Value::Array(messages.into_iter().map(Value::Object).collect()),
    );
    Ok(Value::Object(view))
}

/// Replace a bare binary_content reference with the full entity, adding the
/// extension derived from its filename.
fn expand_binary(store: &ContentStore, mut message: Fields) -> CsResult<Fields> {
    let Some(bin_id) = message.get("binary_content").and_then(Value::as_u64) else {
        return Ok(message);
    };
    // A stale reference left behind by an unguarded delete surfaces here
    // as NotFound rather than being papered over.
    let mut blob = store.binarycontents.get(bin_id)?.clone();
    let extension = blob
        .get("filename")
        .and_then(Value::as_str)
        .and_then(BinaryContent::extension_of)
        .map(str::to_string);
    if let Some(extension) = extension {
        blob.insert("extension".to_string(), Value::from(extension));
    }
    message.insert("binary_content".to_string(), Value::Object(blob));
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources;
    use cs_core::error::CsError;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().unwrap().clone()
    }

    fn seeded_store() -> (ContentStore, u64, u64) {
        let mut store = ContentStore::new();
        let schedule = resources::schedule::create(&mut store, Fields::new()).unwrap();
        let set = resources::messageset::create(
            &mut store,
            fields(json!({
                "short_name": "set",
                "default_schedule": schedule["id"]
            })),
        )
        .unwrap();
        let blob = resources::binary_content::create(
            &mut store,
            fields(json!({"content": "aGk=", "filename": "voice.note.mp3"})),
        )
        .unwrap();
        (
            store,
            set["id"].as_u64().unwrap(),
            blob["id"].as_u64().unwrap(),
        )
    }

    fn add_message(store: &mut ContentStore, set: u64, seq: i64, text: &str) -> u64 {
        let message = resources::message::create(
            store,
            fields(json!({
                "messageset": set,
                "sequence_number": seq,
                "text_content": text
            })),
        )
        .unwrap();
        message["id"].as_u64().unwrap()
    }

    #[test]
    fn test_message_content_expands_binary_reference() {
        let (mut store, set, blob) = seeded_store();
        let message = resources::message::create(
            &mut store,
            fields(json!({
                "messageset": set,
                "sequence_number": 1,
                "text_content": "hello",
                "binary_content": blob
            })),
        )
        .unwrap();
        let id = message["id"].as_u64().unwrap();

        let view = resolve_message_content(&store, id).unwrap();
        assert_eq!(view["text_content"], json!("hello"));
        assert_eq!(view["binary_content"]["id"], json!(blob));
        assert_eq!(view["binary_content"]["extension"], json!("mp3"));
        assert_eq!(view["binary_content"]["filename"], json!("voice.note.mp3"));
    }

    #[test]
    fn test_message_content_without_binary_passes_through() {
        let (mut store, set, _) = seeded_store();
        let id = add_message(&mut store, set, 1, "plain");

        let view = resolve_message_content(&store, id).unwrap();
        assert_eq!(view["binary_content"], Value::Null);
        assert_eq!(view["text_content"], json!("plain"));
    }

    #[test]
    fn test_messageset_view_sorts_by_sequence_number() {
        let (mut store, set, _) = seeded_store();
        add_message(&mut store, set, 2, "second");
        add_message(&mut store, set, 1, "first");
        add_message(&mut store, set, 3, "third");

        let view = resolve_messageset_messages(&store, set).unwrap();
        let sequences: Vec<i64> = view["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["sequence_number"].as_i64().unwrap())
            .collect();
        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(view["short_name"], json!("set"));
    }

    #[test]
    fn test_messageset_view_ties_keep_insertion_order() {
        let (mut store, set, _) = seeded_store();
        add_message(&mut store, set, 1, "earlier");
        add_message(&mut store, set, 1, "later");

        let view = resolve_messageset_messages(&store, set).unwrap();
        let texts: Vec<&str> = view["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["text_content"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["earlier", "later"]);
    }

    #[test]
    fn test_messageset_view_excludes_other_sets() {
        let (mut store, set, _) = seeded_store();
        let other = resources::messageset::create(
            &mut store,
            fields(json!({"short_name": "other", "default_schedule": 1})),
        )
        .unwrap();
        let other_id = other["id"].as_u64().unwrap();
        add_message(&mut store, set, 1, "mine");
        add_message(&mut store, other_id, 1, "not mine");

        let view = resolve_messageset_messages(&store, set).unwrap();
        assert_eq!(view["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_message_is_not_found() {
        let (store, _, _) = seeded_store();
        assert!(matches!(
            resolve_message_content(&store, 99),
            Err(CsError::NotFound(_))
        ));
    }
}
