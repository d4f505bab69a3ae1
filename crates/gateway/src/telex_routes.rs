//! Telex webhook handling.
//!
//! Incomplete events are acknowledged and dropped; the sender never sees an
//! error. Replies go out through the `TelexSender` seam as threaded
//! responses to the triggering message.

use {
    axum::{Json, extract::State},
    tracing::{debug, warn},
};

use {
    devdict_lookup::{format_reply, normalize},
    devdict_telex::WebhookEvent,
};

use crate::services::GatewayServices;

/// Reply used when the message contains no term once boilerplate is gone.
const EMPTY_TERM_PROMPT: &str =
    "Please provide a term to look up. Example: 'What is REST API?'";

/// Axum handler for `POST /telex/webhook`. Always acknowledges.
pub async fn webhook_handler(
    State(services): State<GatewayServices>,
    Json(event): Json<WebhookEvent>,
) -> Json<serde_json::Value> {
    process_event(&services, event).await;
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handle one webhook delivery end to end.
pub async fn process_event(services: &GatewayServices, event: WebhookEvent) {
    let message = event.message.unwrap_or_default();
    let (Some(text), Some(message_id)) = (message.text, message.id) else {
        debug!("webhook event missing message text or id, ignoring");
        return;
    };
    let Some(channel_id) = event.channel.and_then(|c| c.id) else {
        debug!("webhook event missing channel id, ignoring");
        return;
    };

    let username = event.user.and_then(|u| u.username);
    debug!(channel_id, username = ?username, "webhook message received");

    let term = normalize(&text);
    let reply = if term.is_empty() {
        EMPTY_TERM_PROMPT.to_string()
    } else {
        match services.lookup.lookup_term(&term).await {
            Ok(outcome) => format_reply(&outcome, &term),
            Err(e) => {
                warn!(term, error = %e, "lookup failed, dropping webhook reply");
                return;
            },
        }
    };

    if let Err(e) = services
        .telex
        .send_message(&channel_id, &reply, Some(&message_id))
        .await
    {
        warn!(channel_id, error = %e, "failed to send telex reply");
    }
}
