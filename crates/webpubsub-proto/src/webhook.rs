//! Webhook batch payloads.
//!
//! The service posts batches of events to the app server as JSON. On
//! encrypted channels the `data` field holds a wire envelope rather than
//! plaintext; decrypting it is left to higher layers.

use serde::{Deserialize, Serialize};

use crate::{
    channel::is_encrypted_channel,
    errors::{ProtocolError, Result},
};

/// A batch of events delivered in one webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Delivery time, milliseconds since the Unix epoch
    pub time_ms: i64,
    /// Events in the order the service emitted them
    pub events: Vec<WebhookEvent>,
}

/// A single event in a webhook batch.
///
/// Which optional fields are set depends on `name`: `client_event` carries
/// `event`, `data` and `socket_id`; `member_added` carries `user_id`;
/// `channel_occupied` carries only the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Kind of webhook event, e.g. `channel_occupied` or `client_event`
    pub name: String,
    /// Channel the event happened on
    pub channel: String,
    /// Client event name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event: String,
    /// Event payload; a wire envelope on encrypted channels
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    /// Socket that triggered the event
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub socket_id: String,
    /// Member that joined or left a presence channel
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
}

impl WebhookEvent {
    /// True if `data` is an encrypted envelope.
    pub fn is_encrypted(&self) -> bool {
        is_encrypted_channel(&self.channel)
    }
}

impl Webhook {
    /// Parse a webhook request body.
    ///
    /// Only call this after the body's signature has been verified.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ProtocolError::MalformedWebhook(e.to_string()))
    }

    /// Number of events on encrypted channels.
    pub fn encrypted_event_count(&self) -> usize {
        self.events.iter().filter(|event| event.is_encrypted()).count()
    }
}
