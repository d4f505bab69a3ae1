//! Agent-to-agent (A2A) JSON-RPC 2.0 protocol definitions.
//!
//! Envelope types for the `POST /a2a/agent/devdictionary` endpoint. All
//! communication is JSON over HTTP; protocol-level failures travel as error
//! envelopes inside an HTTP 200, never as non-2xx statuses.

use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

pub const JSONRPC_VERSION: &str = "2.0";
pub const METHOD_MESSAGE_SEND: &str = "message/send";

// ── Error codes ──────────────────────────────────────────────────────────────

pub mod error_codes {
    /// The request is not a valid JSON-RPC 2.0 request.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The requested method is not exposed by this agent.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// The params carry no usable message text.
    pub const INVALID_PARAMS: i32 = -32602;
    /// Anything unexpected while handling an otherwise valid request.
    pub const INTERNAL_ERROR: i32 = -32603;
}

// ── Request envelope ─────────────────────────────────────────────────────────

/// Incoming JSON-RPC 2.0 request.
///
/// Every field the dispatcher validates is optional at the wire level; an
/// absent `jsonrpc` deserializes to "2.0" and passes version validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub params: Option<AgentParams>,
}

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentParams {
    #[serde(default)]
    pub message: Option<AgentMessage>,
    #[serde(default)]
    pub configuration: Option<AgentConfiguration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessage {
    #[serde(default = "default_message_kind")]
    pub kind: String,
    #[serde(default = "default_user_role")]
    pub role: String,
    #[serde(default)]
    pub parts: Option<Vec<MessagePart>>,
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(rename = "taskId", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePart {
    #[serde(default = "default_part_kind")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl MessagePart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: default_part_kind(),
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfiguration {
    #[serde(default = "default_blocking")]
    pub blocking: bool,
}

fn default_message_kind() -> String {
    "message".to_string()
}

fn default_user_role() -> String {
    "user".to_string()
}

fn default_part_kind() -> String {
    "text".to_string()
}

fn default_blocking() -> bool {
    true
}

// ── Response envelope ────────────────────────────────────────────────────────

/// Outgoing JSON-RPC 2.0 response.
///
/// `id` echoes the request id verbatim and is always serialized, as `null`
/// when the request carried none. Exactly one of `result`/`error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub jsonrpc: String,
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AgentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AgentError>,
}

impl AgentResponse {
    pub fn ok(id: Option<String>, result: AgentResult) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: Option<String>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            id,
            result: None,
            error: Some(AgentError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResult {
    pub message: ReplyMessage,
    pub artifacts: Vec<serde_json::Value>,
    pub history: Vec<HistoryItem>,
    pub status: String,
}

impl AgentResult {
    /// A completed exchange: the assistant reply plus the two-turn history
    /// (original user message, then the reply). `status` is "completed" even
    /// when the reply is a not-found message — the protocol exchange itself
    /// succeeded.
    pub fn completed(user_message: impl Into<String>, reply: impl Into<String>) -> Self {
        let user_message = user_message.into();
        let reply = reply.into();
        Self {
            message: ReplyMessage {
                kind: default_message_kind(),
                role: "assistant".into(),
                parts: vec![MessagePart::text(reply.clone())],
            },
            artifacts: Vec::new(),
            history: vec![
                HistoryItem {
                    role: "user".into(),
                    content: user_message,
                },
                HistoryItem {
                    role: "assistant".into(),
                    content: reply,
                },
            ],
            status: "completed".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyMessage {
    pub kind: String,
    pub role: String,
    pub parts: Vec<MessagePart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_deserialize_from_the_wire_shape() {
        let req: AgentRequest = serde_json::from_str(
            r#"{
                "jsonrpc": "2.0",
                "id": "req-1",
                "method": "message/send",
                "params": {
                    "message": {
                        "kind": "message",
                        "role": "user",
                        "parts": [{"kind": "text", "text": "what is REST?"}],
                        "messageId": "m-1"
                    },
                    "configuration": {"blocking": true}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.id.as_deref(), Some("req-1"));
        assert_eq!(req.method.as_deref(), Some("message/send"));
        let parts = req.params.unwrap().message.unwrap().parts.unwrap();
        assert_eq!(parts[0].text.as_deref(), Some("what is REST?"));
    }

    #[test]
    fn absent_jsonrpc_field_defaults_to_version_two() {
        let req: AgentRequest = serde_json::from_str(r#"{"method": "message/send"}"#).unwrap();
        assert_eq!(req.jsonrpc, JSONRPC_VERSION);
        assert!(req.id.is_none());
    }

    #[test]
    fn success_response_serializes_without_an_error_key() {
        let resp = AgentResponse::ok(
            Some("7".into()),
            AgentResult::completed("what is REST?", "a reply"),
        );
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], "7");
        assert!(value.get("error").is_none());
        assert_eq!(value["result"]["status"], "completed");
        assert_eq!(value["result"]["message"]["role"], "assistant");
        assert_eq!(value["result"]["message"]["parts"][0]["text"], "a reply");
        assert_eq!(value["result"]["artifacts"], serde_json::json!([]));

        let history = value["result"]["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["role"], "user");
        assert_eq!(history[0]["content"], "what is REST?");
        assert_eq!(history[1]["role"], "assistant");
        assert_eq!(history[1]["content"], "a reply");
    }

    #[test]
    fn error_response_serializes_without_a_result_key() {
        let resp =
            AgentResponse::err(None, error_codes::INVALID_REQUEST, "Invalid JSON-RPC version");
        let value = serde_json::to_value(&resp).unwrap();

        assert!(value.get("result").is_none());
        assert_eq!(value["error"]["code"], -32600);
        assert_eq!(value["error"]["message"], "Invalid JSON-RPC version");
        // The id key is present and null when the request carried no id.
        assert!(value.as_object().unwrap().contains_key("id"));
        assert_eq!(value["id"], serde_json::Value::Null);
    }
}
