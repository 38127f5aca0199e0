//! Typed client for the content store REST API.
//!
//! Paths, methods, and expected status codes mirror the service contract:
//! 201 for create, 200 for read/update, 204 for delete. Anything else comes
//! back as `CsError::Server` carrying the raw body so callers can inspect
//! the field-keyed validation messages.

use serde::de::DeserializeOwned;
use serde_json::Value;

use cs_core::config::ClientConfig;
use cs_core::error::{CsError, CsResult};
use cs_core::http::{Method, Request};
use cs_models::{BinaryContent, Message, MessageContent, MessageSet, MessageSetMessages, Schedule};

use crate::transport::Transport;

/// Client for the content store API, generic over its transport.
pub struct ContentStoreClient<T: Transport> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ContentStoreClient<T> {
    /// Build a client from configuration and a transport.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The transport, for tests that need to reach through to a fake.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_root())
    }

    async fn send_expect(&self, request: Request, expected: u16) -> CsResult<Value> {
        let request = request.with_token(&self.config.auth_token);
        let response = self.transport.send(request).await?;
        if response.code == expected {
            Ok(response.data)
        } else {
            Err(CsError::Server {
                status: response.code,
                body: response.body,
            })
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> CsResult<R> {
        let data = self
            .send_expect(Request::new(Method::Get, self.url(path)), 200)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn post_json<R: DeserializeOwned>(&self, path: &str, body: Value) -> CsResult<R> {
        let data = self
            .send_expect(Request::new(Method::Post, self.url(path)).with_body(body), 201)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn put_json<R: DeserializeOwned>(&self, path: &str, body: Value) -> CsResult<R> {
        let data = self
            .send_expect(Request::new(Method::Put, self.url(path)).with_body(body), 200)
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn delete_empty(&self, path: &str) -> CsResult<()> {
        self.send_expect(Request::new(Method::Delete, self.url(path)), 204)
            .await?;
        Ok(())
    }

    // -- Schedules --

    pub async fn get_schedules(&self) -> CsResult<Vec<Schedule>> {
        self.get_json("/schedule/").await
    }

    pub async fn get_schedule(&self, schedule_id: u64) -> CsResult<Schedule> {
        self.get_json(&format!("/schedule/{schedule_id}/")).await
    }

    pub async fn create_schedule(&self, schedule: &Schedule) -> CsResult<Schedule> {
        self.post_json("/schedule/", serde_json::to_value(schedule)?)
            .await
    }

    /// Partial update; `fields` carries only what should change.
    pub async fn update_schedule(&self, schedule_id: u64, fields: Value) -> CsResult<Schedule> {
        self.put_json(&format!("/schedule/{schedule_id}/"), fields)
            .await
    }

    pub async fn delete_schedule(&self, schedule_id: u64) -> CsResult<()> {
        self.delete_empty(&format!("/schedule/{schedule_id}/")).await
    }

    // -- Message sets --

    pub async fn get_messagesets(&self) -> CsResult<Vec<MessageSet>> {
        self.get_json("/messageset/").await
    }

    pub async fn get_messageset(&self, messageset_id: u64) -> CsResult<MessageSet> {
        self.get_json(&format!("/messageset/{messageset_id}/")).await
    }

    /// The composite view: all of the set's messages, content expanded,
    /// sorted by sequence number.
    pub async fn get_messageset_messages(
        &self,
        messageset_id: u64,
    ) -> CsResult<MessageSetMessages> {
        self.get_json(&format!("/messageset/{messageset_id}/messages"))
            .await
    }

    pub async fn create_messageset(&self, messageset: &MessageSet) -> CsResult<MessageSet> {
        self.post_json("/messageset/", serde_json::to_value(messageset)?)
            .await
    }

    pub async fn update_messageset(
        &self,
        messageset_id: u64,
        fields: Value,
    ) -> CsResult<MessageSet> {
        self.put_json(&format!("/messageset/{messageset_id}/"), fields)
            .await
    }

    pub async fn delete_messageset(&self, messageset_id: u64) -> CsResult<()> {
        self.delete_empty(&format!("/messageset/{messageset_id}/"))
            .await
    }

    // -- Messages --

    pub async fn get_messages(&self) -> CsResult<Vec<Message>> {
        self.get_json("/message/").await
    }

    pub async fn get_message(&self, message_id: u64) -> CsResult<Message> {
        self.get_json(&format!("/message/{message_id}/")).await
    }

    /// The composite view: the message with its binary content expanded.
    pub async fn get_message_content(&self, message_id: u64) -> CsResult<MessageContent> {
        self.get_json(&format!("/message/{message_id}/content")).await
    }

    pub async fn create_message(&self, message: &Message) -> CsResult<Message> {
        self.post_json("/message/", serde_json::to_value(message)?)
            .await
    }

    pub async fn update_message(&self, message_id: u64, fields: Value) -> CsResult<Message> {
        self.put_json(&format!("/message/{message_id}/"), fields)
            .await
    }

    pub async fn delete_message(&self, message_id: u64) -> CsResult<()> {
        self.delete_empty(&format!("/message/{message_id}/")).await
    }

    // -- Binary content --

    pub async fn get_binarycontents(&self) -> CsResult<Vec<BinaryContent>> {
        self.get_json("/binarycontent/").await
    }

    pub async fn get_binarycontent(&self, binarycontent_id: u64) -> CsResult<BinaryContent> {
        self.get_json(&format!("/binarycontent/{binarycontent_id}/"))
            .await
    }

    /// Upload a blob; the bytes travel base64-encoded in the JSON body.
    pub async fn create_binarycontent(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> CsResult<BinaryContent> {
        let body = serde_json::json!({
            "filename": filename,
            "content": BinaryContent::encode(bytes),
        });
        self.post_json("/binarycontent/", body).await
    }

    pub async fn update_binarycontent(
        &self,
        binarycontent_id: u64,
        fields: Value,
    ) -> CsResult<BinaryContent> {
        self.put_json(&format!("/binarycontent/{binarycontent_id}/"), fields)
            .await
    }

    pub async fn delete_binarycontent(&self, binarycontent_id: u64) -> CsResult<()> {
        self.delete_empty(&format!("/binarycontent/{binarycontent_id}/"))
            .await
    }
}
