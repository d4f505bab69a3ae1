//! JSON-RPC dispatcher for the agent-to-agent endpoint.
//!
//! One request in, one envelope out. Protocol-level failures are error
//! envelopes inside an HTTP 200; the HTTP status never reflects them.

use {
    axum::{Json, extract::State},
    tracing::{info, warn},
};

use {
    devdict_lookup::{format_reply, normalize},
    devdict_protocol::{
        AgentRequest, AgentResponse, AgentResult, JSONRPC_VERSION, METHOD_MESSAGE_SEND,
        error_codes,
    },
};

use crate::services::GatewayServices;

/// Axum handler for `POST /a2a/agent/devdictionary`.
pub async fn a2a_handler(
    State(services): State<GatewayServices>,
    Json(request): Json<AgentRequest>,
) -> Json<AgentResponse> {
    Json(dispatch(&services, request).await)
}

/// Validate and route one JSON-RPC request.
///
/// Every arm is terminal and produces exactly one response envelope with the
/// request id echoed verbatim (still `null` when the request had none).
pub async fn dispatch(services: &GatewayServices, request: AgentRequest) -> AgentResponse {
    let id = request.id.clone();
    info!(id = ?id, method = ?request.method, "a2a request received");

    if request.jsonrpc != JSONRPC_VERSION {
        return AgentResponse::err(id, error_codes::INVALID_REQUEST, "Invalid JSON-RPC version");
    }

    let method = request.method.as_deref().unwrap_or_default();
    if method != METHOD_MESSAGE_SEND {
        return AgentResponse::err(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        );
    }

    let Some(user_message) = first_part_text(&request) else {
        return AgentResponse::err(id, error_codes::INVALID_PARAMS, "No message text provided");
    };

    match answer(services, &user_message).await {
        Ok(reply) => AgentResponse::ok(id, AgentResult::completed(user_message, reply)),
        Err(e) => {
            warn!(error = %e, "a2a dispatch failed");
            AgentResponse::err(
                id,
                error_codes::INTERNAL_ERROR,
                format!("Internal error: {e}"),
            )
        },
    }
}

/// Text of the first message part; `None` when missing or blank.
fn first_part_text(request: &AgentRequest) -> Option<String> {
    let text = request
        .params
        .as_ref()?
        .message
        .as_ref()?
        .parts
        .as_ref()?
        .first()?
        .text
        .as_ref()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text.clone())
    }
}

/// Normalize, look up, and format one user message.
async fn answer(services: &GatewayServices, user_message: &str) -> anyhow::Result<String> {
    let term = normalize(user_message);
    let outcome = services.lookup.lookup_term(&term).await?;
    Ok(format_reply(&outcome, &term))
}
