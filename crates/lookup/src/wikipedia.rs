//! Wikipedia page-summary provider.

use {async_trait::async_trait, serde::Deserialize, tracing::debug};

use crate::provider::{
    Definition, DefinitionProvider, LOOKUP_TIMEOUT, ProviderReply, shared_http_client,
};

const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org";
const SOURCE_NAME: &str = "Wikipedia";

/// Requests the summary endpoint for the exact term.
///
/// A "no article with that title" response is the same miss as a transport
/// failure; the caller never sees the difference.
pub struct WikipediaProvider {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(WIKIPEDIA_BASE_URL)
    }

    /// Point the provider at a different host. Used by tests.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: shared_http_client().clone(),
            base_url: base_url.into(),
        }
    }

    async fn summary(&self, term: &str) -> Option<Definition> {
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.base_url,
            urlencoding::encode(term)
        );
        debug!(%url, "searching Wikipedia");

        let resp = self
            .client
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "Wikipedia summary returned non-success");
            return None;
        }

        let payload: SummaryPayload = resp.json().await.ok()?;
        let extract = payload.extract.filter(|e| !e.is_empty())?;
        let page = payload
            .content_urls
            .and_then(|u| u.desktop)
            .and_then(|d| d.page)
            .filter(|p| !p.is_empty())?;

        Some(Definition {
            term: term.to_string(),
            definition: extract,
            source: SOURCE_NAME.into(),
            url: page,
        })
    }
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DefinitionProvider for WikipediaProvider {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn lookup(&self, term: &str) -> ProviderReply {
        match self.summary(term).await {
            Some(definition) => ProviderReply::Found(definition),
            None => ProviderReply::Miss,
        }
    }
}

/// Subset of the Wikipedia REST summary response we care about.
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PlatformUrls>,
}

#[derive(Debug, Deserialize)]
struct PlatformUrls {
    #[serde(default)]
    page: Option<String>,
}
