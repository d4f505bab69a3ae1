//! Outbound message delivery to Telex.

use std::time::Duration;

use {
    async_trait::async_trait,
    serde::Serialize,
    tracing::{debug, info},
};

use crate::{
    config::TelexConfig,
    error::{Error, Result},
};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Capability to push a message into a Telex channel.
///
/// The gateway holds this as a trait object so webhook handling can be
/// exercised in tests without a network.
#[async_trait]
pub trait TelexSender: Send + Sync {
    /// Deliver `text` to `channel_id`, optionally as a reply to an earlier
    /// message.
    async fn send_message(
        &self,
        channel_id: &str,
        text: &str,
        reply_to_message_id: Option<&str>,
    ) -> Result<()>;
}

/// HTTP implementation of [`TelexSender`].
pub struct TelexOutbound {
    client: reqwest::Client,
    api_base: String,
}

/// Wire payload for the Telex message API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessagePayload<'a> {
    channel_id: &'a str,
    text: &'a str,
    reply_to_message_id: Option<&'a str>,
}

impl TelexOutbound {
    #[must_use]
    pub fn new(config: &TelexConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
        }
    }
}

#[async_trait]
impl TelexSender for TelexOutbound {
    async fn send_message(
        &self,
        channel_id: &str,
        text: &str,
        reply_to_message_id: Option<&str>,
    ) -> Result<()> {
        debug!(channel_id, reply_to_message_id, "sending telex message");

        let payload = SendMessagePayload {
            channel_id,
            text,
            reply_to_message_id,
        };
        let resp = self
            .client
            .post(&self.api_base)
            .timeout(SEND_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!(channel_id, "telex message sent");
        Ok(())
    }
}
