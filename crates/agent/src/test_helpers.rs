//! Shared fakes for agent tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use artscope_core::artwork::{
    Artist, ArtistRef, ArtworkDetail, ArtworkPage, ArtworkSummary, CatalogId, Pagination,
};
use artscope_core::error::{ProviderError, ResearchError};
use artscope_core::message::Message;
use artscope_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use artscope_core::research::{SearchHit, SearchProvider};
use artscope_core::{Catalog, Outcome};

/// A provider that returns a sequence of scripted replies.
///
/// Each call to `complete` pops the next reply and records the request.
/// Panics if more calls are made than replies provided.
pub struct SequentialMockProvider {
    replies: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl SequentialMockProvider {
    pub fn new(replies: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn single_text(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Provider for SequentialMockProvider {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let model = request.model.clone();
        self.requests.lock().unwrap().push(request);

        let reply = self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            panic!("SequentialMockProvider: no more replies");
        })?;

        Ok(ProviderResponse {
            message: Message::assistant(reply),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model,
        })
    }
}

/// An in-memory catalog. Unknown ids degrade the way the HTTP client does.
#[derive(Default)]
pub struct ScriptedCatalog {
    pub suggestions: Vec<ArtistRef>,
    pub search_results: HashMap<String, Vec<ArtistRef>>,
    pub artists: HashMap<CatalogId, Artist>,
    pub pages: HashMap<(CatalogId, u32), ArtworkPage>,
    pub artworks: HashMap<CatalogId, ArtworkDetail>,
    pub page_requests: Mutex<Vec<(CatalogId, u32)>>,
}

impl ScriptedCatalog {
    pub fn page_requests(&self) -> Vec<(CatalogId, u32)> {
        self.page_requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Catalog for ScriptedCatalog {
    async fn search_artists(&self, query: &str) -> Outcome<Vec<ArtistRef>> {
        match self.search_results.get(query) {
            Some(found) => Outcome::fetched(found.clone()),
            None => Outcome::fetched(Vec::new()),
        }
    }

    async fn random_artists(&self) -> Outcome<Vec<ArtistRef>> {
        Outcome::fetched(self.suggestions.clone())
    }

    async fn artist_details(&self, id: CatalogId) -> Outcome<Artist> {
        match self.artists.get(&id) {
            Some(artist) => Outcome::fetched(artist.clone()),
            None => Outcome::degraded(Artist::unknown(id), "Error fetching artist details: 404"),
        }
    }

    async fn artist_artworks(&self, artist_id: CatalogId, page: u32) -> Outcome<ArtworkPage> {
        self.page_requests.lock().unwrap().push((artist_id, page));
        match self.pages.get(&(artist_id, page)) {
            Some(found) => Outcome::fetched(found.clone()),
            None => Outcome::fetched(ArtworkPage::default()),
        }
    }

    async fn artwork_details(&self, id: CatalogId) -> Outcome<ArtworkDetail> {
        match self.artworks.get(&id) {
            Some(detail) => Outcome::fetched(detail.clone()),
            None => Outcome::degraded(
                ArtworkDetail::empty(id),
                "Error fetching artwork details: 404",
            ),
        }
    }
}

/// A search engine that always answers with the same hits.
pub struct FixedSearch {
    pub hits: Result<Vec<SearchHit>, ResearchError>,
    pub queries: Mutex<Vec<String>>,
}

impl FixedSearch {
    pub fn empty() -> Self {
        Self::new(Ok(Vec::new()))
    }

    pub fn new(hits: Result<Vec<SearchHit>, ResearchError>) -> Self {
        Self {
            hits,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SearchProvider for FixedSearch {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchHit>, ResearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.hits.clone()
    }
}

pub fn monet() -> Artist {
    Artist {
        id: 1,
        title: "Claude Monet".into(),
        birth_date: Some("1840".into()),
        death_date: Some("1926".into()),
        description: Some("French painter, founder of Impressionism.".into()),
    }
}

pub fn water_lilies() -> ArtworkDetail {
    ArtworkDetail {
        id: 16568,
        title: Some("Water Lilies".into()),
        artist_title: Some("Claude Monet".into()),
        date_display: Some("1906".into()),
        medium_display: Some("Oil on canvas".into()),
        dimensions: Some("89.9 × 94.1 cm".into()),
        image_id: Some("3c27b499-af56-f0d5-93b5-a7f2f1ad5813".into()),
        style_titles: vec!["Impressionism".into()],
    }
}

/// A page of `count` artworks numbered from `page * 100`.
pub fn artwork_page(page: u32, count: u32, total_pages: Option<u32>) -> ArtworkPage {
    ArtworkPage {
        artworks: (0..count)
            .map(|i| ArtworkSummary {
                id: u64::from(page * 100 + i),
                title: Some(format!("Artwork {}", page * 100 + i)),
                image_id: None,
                date_display: None,
            })
            .collect(),
        pagination: Pagination {
            current_page: Some(page),
            total_pages,
            total: None,
        },
    }
}
