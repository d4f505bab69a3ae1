//! Trait interfaces for the collaborators the request handlers delegate to.
//! Each has a `Noop` implementation so the gateway (and its tests) can run
//! without touching the network.

use std::sync::Arc;

use async_trait::async_trait;

use {
    devdict_lookup::{LookupOutcome, LookupPipeline},
    devdict_telex::{TelexConfig, TelexOutbound, TelexSender},
};

/// Capabilities shared by all request handlers.
#[derive(Clone)]
pub struct GatewayServices {
    pub lookup: Arc<dyn LookupService>,
    pub telex: Arc<dyn TelexSender>,
}

impl GatewayServices {
    /// Production wiring: the default provider chain and a real Telex client.
    #[must_use]
    pub fn live(telex: &TelexConfig) -> Self {
        Self {
            lookup: Arc::new(PipelineLookupService::new(
                LookupPipeline::with_default_providers(),
            )),
            telex: Arc::new(TelexOutbound::new(telex)),
        }
    }

    /// Inert wiring: lookups never find anything and sends vanish.
    #[must_use]
    pub fn noop() -> Self {
        Self {
            lookup: Arc::new(NoopLookupService),
            telex: Arc::new(NoopTelexSender),
        }
    }
}

/// Term resolution as the gateway sees it.
///
/// The signature is fallible so the dispatcher has a real internal-error
/// path to catch; the pipeline-backed implementation never actually errors.
#[async_trait]
pub trait LookupService: Send + Sync {
    async fn lookup_term(&self, term: &str) -> anyhow::Result<LookupOutcome>;
}

/// [`LookupService`] backed by the real provider chain.
pub struct PipelineLookupService {
    pipeline: LookupPipeline,
}

impl PipelineLookupService {
    #[must_use]
    pub fn new(pipeline: LookupPipeline) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl LookupService for PipelineLookupService {
    async fn lookup_term(&self, term: &str) -> anyhow::Result<LookupOutcome> {
        Ok(self.pipeline.lookup(term).await)
    }
}

/// Lookup that knows nothing: empty terms short-circuit, everything else is
/// not found. Mirrors the pipeline's outer contract.
pub struct NoopLookupService;

#[async_trait]
impl LookupService for NoopLookupService {
    async fn lookup_term(&self, term: &str) -> anyhow::Result<LookupOutcome> {
        let term = term.trim();
        if term.is_empty() {
            Ok(LookupOutcome::NoTerm)
        } else {
            Ok(LookupOutcome::NotFound {
                term: term.to_string(),
            })
        }
    }
}

/// Sender that drops every message.
pub struct NoopTelexSender;

#[async_trait]
impl TelexSender for NoopTelexSender {
    async fn send_message(
        &self,
        _channel_id: &str,
        _text: &str,
        _reply_to_message_id: Option<&str>,
    ) -> devdict_telex::Result<()> {
        Ok(())
    }
}
