//! Inbound webhook event payloads.

use serde::{Deserialize, Serialize};

/// A Telex webhook delivery. Every field the handler relies on is optional
/// at the wire level; validation happens in the webhook handler, which drops
/// incomplete events silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub message: Option<EventMessage>,
    pub channel: Option<EventChannel>,
    pub user: Option<EventUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventMessage {
    pub id: Option<String>,
    pub text: Option<String>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventChannel {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventUser {
    pub id: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
}
