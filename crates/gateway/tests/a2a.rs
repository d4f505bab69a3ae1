#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the A2A JSON-RPC endpoint.

use std::{net::SocketAddr, sync::Arc};

use {async_trait::async_trait, serde_json::json};

use {
    devdict_gateway::{
        build_app,
        services::{GatewayServices, LookupService, NoopTelexSender},
    },
    devdict_lookup::{Definition, LookupOutcome},
};

/// Lookup that always resolves to a fixed outcome.
struct ScriptedLookup {
    outcome: LookupOutcome,
}

#[async_trait]
impl LookupService for ScriptedLookup {
    async fn lookup_term(&self, _term: &str) -> anyhow::Result<LookupOutcome> {
        Ok(self.outcome.clone())
    }
}

/// Lookup that fails, driving the internal-error arm.
struct FailingLookup;

#[async_trait]
impl LookupService for FailingLookup {
    async fn lookup_term(&self, _term: &str) -> anyhow::Result<LookupOutcome> {
        anyhow::bail!("boom")
    }
}

async fn start_server(services: GatewayServices) -> SocketAddr {
    let app = build_app(services);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn post_rpc(addr: SocketAddr, body: serde_json::Value) -> serde_json::Value {
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/a2a/agent/devdictionary"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "protocol errors must still be HTTP 200");
    resp.json().await.unwrap()
}

fn message_send_request(id: &str, text: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "message/send",
        "params": { "message": { "parts": [{ "kind": "text", "text": text }] } }
    })
}

#[tokio::test]
async fn not_found_lookup_is_still_a_completed_exchange() {
    // Noop services: every term misses, like both providers being down.
    let addr = start_server(GatewayServices::noop()).await;

    let body = post_rpc(addr, message_send_request("1", "what is REST?")).await;

    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], "1");
    assert!(body.get("error").is_none());
    assert_eq!(body["result"]["status"], "completed");

    let reply = body["result"]["message"]["parts"][0]["text"].as_str().unwrap();
    assert!(reply.contains("**rest**"), "reply names the term: {reply}");

    let history = body["result"]["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[0]["content"], "what is REST?");
    assert_eq!(history[1]["role"], "assistant");
    assert_eq!(history[1]["content"], reply);
}

#[tokio::test]
async fn found_definition_round_trips_through_the_envelope() {
    let services = GatewayServices {
        lookup: Arc::new(ScriptedLookup {
            outcome: LookupOutcome::Found(Definition {
                term: "rest".into(),
                definition: "An architectural style for distributed systems.".into(),
                source: "MDN Web Docs".into(),
                url: "https://developer.mozilla.org/en-US/docs/Glossary/REST".into(),
            }),
        }),
        telex: Arc::new(NoopTelexSender),
    };
    let addr = start_server(services).await;

    let body = post_rpc(addr, message_send_request("42", "explain REST")).await;

    assert_eq!(body["id"], "42");
    let reply = body["result"]["message"]["parts"][0]["text"].as_str().unwrap();
    assert!(reply.starts_with("📖 **rest**"));
    assert!(reply.contains("_Source: MDN Web Docs_"));
    assert!(reply.contains("https://developer.mozilla.org/en-US/docs/Glossary/REST"));
    assert_eq!(body["result"]["message"]["role"], "assistant");
}

#[tokio::test]
async fn wrong_version_yields_invalid_request() {
    let addr = start_server(GatewayServices::noop()).await;

    let body = post_rpc(
        addr,
        json!({ "jsonrpc": "1.0", "id": "9", "method": "message/send" }),
    )
    .await;

    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], "9");
    assert!(body.get("result").is_none());
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["error"]["message"], "Invalid JSON-RPC version");
}

#[tokio::test]
async fn unknown_method_yields_method_not_found() {
    let addr = start_server(GatewayServices::noop()).await;

    let body = post_rpc(
        addr,
        json!({ "jsonrpc": "2.0", "id": "9", "method": "tasks/get" }),
    )
    .await;

    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["error"]["message"], "Method not found: tasks/get");
}

#[tokio::test]
async fn empty_parts_yield_invalid_params() {
    let addr = start_server(GatewayServices::noop()).await;

    let body = post_rpc(
        addr,
        json!({
            "jsonrpc": "2.0",
            "id": "3",
            "method": "message/send",
            "params": { "message": { "parts": [] } }
        }),
    )
    .await;

    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "No message text provided");
}

#[tokio::test]
async fn blank_text_yields_invalid_params() {
    let addr = start_server(GatewayServices::noop()).await;

    let body = post_rpc(addr, message_send_request("4", "   ")).await;
    assert_eq!(body["error"]["code"], -32602);
}

#[tokio::test]
async fn missing_id_is_echoed_as_null() {
    let addr = start_server(GatewayServices::noop()).await;

    let body = post_rpc(
        addr,
        json!({ "jsonrpc": "1.0", "method": "message/send" }),
    )
    .await;

    assert!(body.as_object().unwrap().contains_key("id"));
    assert_eq!(body["id"], serde_json::Value::Null);
}

#[tokio::test]
async fn lookup_fault_yields_internal_error() {
    let services = GatewayServices {
        lookup: Arc::new(FailingLookup),
        telex: Arc::new(NoopTelexSender),
    };
    let addr = start_server(services).await;

    let body = post_rpc(addr, message_send_request("5", "what is REST?")).await;

    assert_eq!(body["id"], "5");
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["error"]["message"], "Internal error: boom");
}
