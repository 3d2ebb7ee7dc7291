//! Research types and the web search abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ResearchError;

/// A cleaned, bounded text snippet taken from one fetched web page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchExcerpt {
    /// The page URL
    pub source: String,
    /// Extracted text, cut to the excerpt budget
    pub content: String,
}

/// One web search result, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SearchHit {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
        }
    }
}

/// A web search engine: text query in, ranked results out.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &str;

    /// At most `limit` results, best first.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, ResearchError>;
}
