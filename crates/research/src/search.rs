//! DuckDuckGo HTML search provider.
//!
//! Queries the JavaScript-free results page and reads the result anchors.
//! Result links come back as `/l/?uddg=` redirects; they are decoded to the
//! destination URL.

use std::collections::HashSet;

use artscope_config::ResearchConfig;
use artscope_core::error::{Error, ResearchError};
use artscope_core::research::{SearchHit, SearchProvider};
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

const RESULT_SELECTOR: &str = "a.result__a";

pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    search_url: Url,
}

impl DuckDuckGoSearch {
    pub fn new(config: &ResearchConfig) -> artscope_core::Result<Self> {
        let search_url = Url::parse(&config.search_url).map_err(|e| Error::Config {
            message: format!("Invalid search URL '{}': {e}", config.search_url),
        })?;
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.page_timeout())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, search_url })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, ResearchError> {
        debug!(query, limit, "Searching the web");

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", query.trim())])
            .send()
            .await
            .map_err(|e| ResearchError::Search(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::Search(format!(
                "search returned status {}",
                status.as_u16()
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ResearchError::Search(e.to_string()))?;

        let hits = parse_results(&html, limit);
        debug!(count = hits.len(), "Search results parsed");
        Ok(hits)
    }
}

/// Result links from a DuckDuckGo HTML page, in page order, deduplicated.
pub fn parse_results(html: &str, limit: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse(RESULT_SELECTOR) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut hits = Vec::new();
    for anchor in document.select(&selector) {
        if hits.len() >= limit {
            break;
        }
        let Some(href) = anchor.value().attr("href").and_then(normalize_href) else {
            continue;
        };
        if !seen.insert(href.clone()) {
            continue;
        }

        let title = anchor.text().collect::<Vec<_>>().join(" ");
        let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
        hits.push(SearchHit {
            href,
            title: (!title.is_empty()).then_some(title),
        });
    }
    hits
}

/// Absolute destination URL for a result href, or `None` for links that
/// stay on the search engine (ads, internal navigation).
pub fn normalize_href(href: &str) -> Option<String> {
    let href = href.trim();
    let absolute = if href.starts_with("//") {
        format!("https:{href}")
    } else if href.starts_with("/l/") {
        format!("https://duckduckgo.com{href}")
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let host = parsed.host_str()?.to_ascii_lowercase();
    if !host.ends_with("duckduckgo.com") {
        return Some(parsed.to_string());
    }
    if !parsed.path().starts_with("/l/") {
        return None;
    }

    let target = parsed
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.trim().to_string())?;
    let mut destination = Url::parse(&target).ok()?;
    if !matches!(destination.scheme(), "http" | "https") {
        return None;
    }
    destination.set_fragment(None);
    Some(destination.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::Query;
    use axum::response::Html as HtmlBody;
    use axum::routing::get;
    use std::collections::HashMap;

    const RESULTS_PAGE: &str = r#"
<html><body>
  <div class="result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.artic.edu%2Fartworks%2F16568%23top&amp;rut=abc">
      Water Lilies | The Art Institute of Chicago
    </a>
  </div>
  <div class="result result--ad">
    <a class="result__a" href="https://duckduckgo.com/y.js?ad_provider=x">Buy prints</a>
  </div>
  <div class="result">
    <a class="result__a" href="https://en.wikipedia.org/wiki/Water_Lilies_(Monet_series)">Water Lilies (Monet series)</a>
  </div>
  <div class="result">
    <a class="result__a" href="https://www.artic.edu/artworks/16568">Duplicate</a>
  </div>
  <div class="result">
    <a class="result__a" href="/l/?uddg=https%3A%2F%2Fwww.moma.org%2Fcollection%2Fworks%2F80220">MoMA</a>
  </div>
  <div class="result">
    <a class="result__a" href="https://www.khanacademy.org/monet">Khan Academy</a>
  </div>
</body></html>
"#;

    #[test]
    fn parses_and_decodes_results() {
        let hits = parse_results(RESULTS_PAGE, 3);
        let hrefs: Vec<&str> = hits.iter().map(|h| h.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "https://www.artic.edu/artworks/16568",
                "https://en.wikipedia.org/wiki/Water_Lilies_(Monet_series)",
                "https://www.moma.org/collection/works/80220",
            ]
        );
        assert_eq!(
            hits[0].title.as_deref(),
            Some("Water Lilies | The Art Institute of Chicago")
        );
    }

    #[test]
    fn page_without_results_is_empty() {
        assert!(parse_results("<html><body>No results.</body></html>", 3).is_empty());
    }

    #[test]
    fn normalize_rejects_non_http() {
        assert_eq!(normalize_href("javascript:void(0)"), None);
        assert_eq!(normalize_href("/html/?q=next"), None);
        assert_eq!(
            normalize_href("//duckduckgo.com/l/?uddg=ftp%3A%2F%2Fexample.com"),
            None
        );
    }

    #[tokio::test]
    async fn search_sends_query_and_parses_page() {
        let router = Router::new().route(
            "/html/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                match params.get("q").map(String::as_str) {
                    Some("Water Lilies Claude Monet art historical context analysis") => {
                        HtmlBody(RESULTS_PAGE.to_string())
                    }
                    _ => HtmlBody("<html><body></body></html>".to_string()),
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let config = ResearchConfig {
            search_url: format!("http://{addr}/html/"),
            ..ResearchConfig::default()
        };
        let search = DuckDuckGoSearch::new(&config).unwrap();
        let hits = search
            .search("Water Lilies Claude Monet art historical context analysis", 2)
            .await
            .unwrap();

        assert_eq!(search.name(), "duckduckgo");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].href, "https://www.artic.edu/artworks/16568");
    }

    #[tokio::test]
    async fn unreachable_search_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ResearchConfig {
            search_url: format!("http://{addr}/html/"),
            ..ResearchConfig::default()
        };
        let search = DuckDuckGoSearch::new(&config).unwrap();
        let err = search.search("anything", 3).await.unwrap_err();
        assert!(matches!(err, ResearchError::Search(_)));
    }
}
