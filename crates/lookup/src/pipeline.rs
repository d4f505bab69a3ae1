//! Ordered provider chain with first-success semantics.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    mdn::MdnProvider,
    provider::{DefinitionProvider, LookupOutcome, ProviderReply},
    wikipedia::WikipediaProvider,
};

/// Tries providers in a fixed priority order and returns the first hit.
///
/// The order is significant: earlier providers are treated as higher quality,
/// and later ones are only consulted when everything before them missed.
/// Adding a source means appending to the list, not a new call site.
pub struct LookupPipeline {
    providers: Vec<Arc<dyn DefinitionProvider>>,
}

impl LookupPipeline {
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn DefinitionProvider>>) -> Self {
        Self { providers }
    }

    /// The production chain: MDN first, Wikipedia as fallback.
    #[must_use]
    pub fn with_default_providers() -> Self {
        Self::new(vec![
            Arc::new(MdnProvider::new()),
            Arc::new(WikipediaProvider::new()),
        ])
    }

    /// Resolve a bare search term.
    ///
    /// An empty (post-trim) term short-circuits before any provider is
    /// contacted. Providers are called strictly sequentially; the first
    /// [`ProviderReply::Found`] wins and the rest are never queried.
    pub async fn lookup(&self, term: &str) -> LookupOutcome {
        let term = term.trim();
        if term.is_empty() {
            return LookupOutcome::NoTerm;
        }

        info!(term, "looking up term");
        for provider in &self.providers {
            match provider.lookup(term).await {
                ProviderReply::Found(definition) => {
                    debug!(term, source = provider.name(), "definition found");
                    return LookupOutcome::Found(definition);
                },
                ProviderReply::Miss => {
                    debug!(term, source = provider.name(), "provider missed");
                },
            }
        }

        LookupOutcome::NotFound {
            term: term.to_string(),
        }
    }
}
