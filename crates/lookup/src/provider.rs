//! Provider abstraction shared by all definition sources.

use std::time::Duration;

use async_trait::async_trait;

/// Per-call bound on outbound reference-source requests. Hitting it is an
/// ordinary miss for that provider, not a fatal error.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared HTTP client for definition providers.
///
/// Providers reuse this client to share connection pools, DNS cache, and TLS
/// sessions; the per-request timeout is applied at each call site.
pub fn shared_http_client() -> &'static reqwest::Client {
    static CLIENT: std::sync::LazyLock<reqwest::Client> =
        std::sync::LazyLock::new(reqwest::Client::new);
    &CLIENT
}

/// A definition retrieved from a reference source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Term as resolved by the source. May differ from the raw query.
    pub term: String,
    /// Non-empty prose; unbounded length (the formatter truncates).
    pub definition: String,
    /// Human-readable source name for attribution lines.
    pub source: String,
    /// Canonical reference link; empty when the source has none.
    pub url: String,
}

/// Outcome of a single provider query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReply {
    Found(Definition),
    /// The source has no answer, or the request to it failed. The two cases
    /// are deliberately not distinguished.
    Miss,
}

/// Aggregate outcome after the whole provider chain has been consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Definition),
    /// The query was empty after trimming; no source was contacted.
    NoTerm,
    /// Every source missed.
    NotFound { term: String },
}

impl LookupOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Aggregate error text for logs and protocol payloads; `None` on success.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Found(_) => None,
            Self::NoTerm => Some("No term provided.".into()),
            Self::NotFound { term } => Some(format!("No definition found for '{term}'.")),
        }
    }
}

/// A single external reference source.
///
/// Implementations never error: transport and parse failures fold into
/// [`ProviderReply::Miss`] so the pipeline's control flow stays ordinary
/// data-driven branching.
#[async_trait]
pub trait DefinitionProvider: Send + Sync {
    /// Human-readable source name used in attribution lines.
    fn name(&self) -> &str;

    async fn lookup(&self, term: &str) -> ProviderReply;
}
