//! MDN Web Docs search provider.

use {async_trait::async_trait, serde::Deserialize, tracing::debug};

use crate::provider::{
    Definition, DefinitionProvider, LOOKUP_TIMEOUT, ProviderReply, shared_http_client,
};

const MDN_BASE_URL: &str = "https://developer.mozilla.org";
const SOURCE_NAME: &str = "MDN Web Docs";

/// Queries the MDN search endpoint and treats the first hit as authoritative.
pub struct MdnProvider {
    client: reqwest::Client,
    base_url: String,
}

impl MdnProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(MDN_BASE_URL)
    }

    /// Point the provider at a different host. Used by tests.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: shared_http_client().clone(),
            base_url: base_url.into(),
        }
    }

    /// Returns `None` on any failure (network, non-2xx, parse, missing
    /// fields) so the pipeline can fall through to the next source.
    async fn search(&self, term: &str) -> Option<Definition> {
        let url = format!(
            "{}/api/v1/search?q={}",
            self.base_url,
            urlencoding::encode(term)
        );
        debug!(%url, "searching MDN");

        let resp = self
            .client
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "MDN search returned non-success");
            return None;
        }

        let payload: SearchPayload = resp.json().await.ok()?;
        let first = payload.documents.into_iter().next()?;
        let summary = first.summary.filter(|s| !s.is_empty())?;
        let path = first.mdn_url.filter(|u| !u.is_empty())?;

        Some(Definition {
            term: term.to_string(),
            definition: summary,
            source: SOURCE_NAME.into(),
            url: format!("{}{}", self.base_url, path),
        })
    }
}

impl Default for MdnProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DefinitionProvider for MdnProvider {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn lookup(&self, term: &str) -> ProviderReply {
        match self.search(term).await {
            Some(definition) => ProviderReply::Found(definition),
            None => ProviderReply::Miss,
        }
    }
}

/// Subset of the MDN search response we care about.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    documents: Vec<SearchDocument>,
}

#[derive(Debug, Deserialize)]
struct SearchDocument {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    mdn_url: Option<String>,
}
