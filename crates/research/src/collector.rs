//! The research collector: search once, fetch every hit, keep what worked.

use std::sync::Arc;
use std::time::Duration;

use artscope_config::ResearchConfig;
use artscope_core::error::{Error, ResearchError};
use artscope_core::research::{ResearchExcerpt, SearchProvider};
use artscope_core::Outcome;
use futures::future::join_all;
use tracing::{debug, info};
use url::Url;

use crate::extract::{extract_text, truncate_chars};
use crate::search::DuckDuckGoSearch;

/// Builds the web search query for an artwork.
pub fn research_query(artwork_title: &str, artist_name: &str) -> String {
    format!("{artwork_title} {artist_name} art historical context analysis")
}

pub struct ResearchCollector {
    search: Arc<dyn SearchProvider>,
    client: reqwest::Client,
    max_results: usize,
    excerpt_chars: usize,
    page_timeout: Duration,
}

impl ResearchCollector {
    pub fn new(config: &ResearchConfig, search: Arc<dyn SearchProvider>) -> artscope_core::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            search,
            client,
            max_results: config.max_results,
            excerpt_chars: config.excerpt_chars,
            page_timeout: config.page_timeout(),
        })
    }

    /// A collector backed by DuckDuckGo.
    pub fn from_config(config: &ResearchConfig) -> artscope_core::Result<Self> {
        let search = DuckDuckGoSearch::new(config)?;
        Self::new(config, Arc::new(search))
    }

    /// Excerpts for the artwork, in search rank order.
    ///
    /// A failed search degrades to an empty list. Pages that cannot be
    /// fetched are skipped without a notice.
    pub async fn collect(&self, artwork_title: &str, artist_name: &str) -> Outcome<Vec<ResearchExcerpt>> {
        let query = research_query(artwork_title, artist_name);
        info!(query = %query, provider = self.search.name(), "Researching artwork");

        let hits = match self.search.search(&query, self.max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                return Outcome::degraded(Vec::new(), format!("Error during web research: {e}"));
            }
        };

        // join_all yields results in input order, so rank survives.
        let fetches = hits
            .iter()
            .take(self.max_results)
            .map(|hit| self.fetch_excerpt(&hit.href));
        let excerpts: Vec<ResearchExcerpt> = join_all(fetches)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(excerpt) => Some(excerpt),
                Err(e) => {
                    debug!(error = %e, "Skipping research source");
                    None
                }
            })
            .collect();

        info!(sources = excerpts.len(), "Research collected");
        Outcome::fetched(excerpts)
    }

    async fn fetch_excerpt(&self, href: &str) -> Result<ResearchExcerpt, ResearchError> {
        let url = Url::parse(href).map_err(|e| ResearchError::Parse {
            url: href.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(url)
            .timeout(self.page_timeout)
            .send()
            .await
            .map_err(|e| ResearchError::Fetch {
                url: href.to_string(),
                reason: e.to_string(),
            })?;

        // Error pages are kept: whatever the server sent is the page.
        let body = response.text().await.map_err(|e| ResearchError::Fetch {
            url: href.to_string(),
            reason: e.to_string(),
        })?;

        let text = extract_text(&body);
        Ok(ResearchExcerpt {
            source: href.to_string(),
            content: truncate_chars(&text, self.excerpt_chars).to_string(),
        })
    }
}
