//! HTTP implementation of the `Catalog` trait.
//!
//! One GET per operation against the API root, with a fixed per-request
//! timeout. Transport failures, non-success statuses, and unexpected bodies
//! all become `Outcome::Degraded` with the operation's default value.

use std::time::Duration;

use artscope_config::CatalogConfig;
use artscope_core::artwork::{
    Artist, ArtistRef, ArtworkDetail, ArtworkPage, ArtworkSummary, CatalogId, Pagination,
};
use artscope_core::error::{CatalogError, Error};
use artscope_core::{Catalog, Outcome};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

const ARTIST_REF_FIELDS: &str = "id,title";
const ARTIST_FIELDS: &str = "id,title,birth_date,death_date,description";
const ARTWORK_SUMMARY_FIELDS: &str = "id,title,image_id,date_display";
const ARTWORK_DETAIL_FIELDS: &str =
    "title,artist_title,date_display,medium_display,dimensions,image_id,style_titles";

/// The catalog's response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
    #[serde(default)]
    pagination: Pagination,
}

/// Client for the museum catalog API.
pub struct CatalogClient {
    base_url: Url,
    client: reqwest::Client,
    timeout: Duration,
    suggestion_timeout: Duration,
    artworks_per_page: u32,
    search_limit: u32,
    suggestion_limit: u32,
}

impl CatalogClient {
    /// Create a client from the `[catalog]` configuration section.
    pub fn new(config: &CatalogConfig) -> artscope_core::Result<Self> {
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| Error::Config {
            message: format!("Invalid catalog base URL '{base}': {e}"),
        })?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            timeout: config.timeout(),
            suggestion_timeout: config.suggestion_timeout(),
            artworks_per_page: config.artworks_per_page,
            search_limit: config.search_limit,
            suggestion_limit: config.suggestion_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn artworks_per_page(&self) -> u32 {
        self.artworks_per_page
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<Envelope<T>, CatalogError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| CatalogError::Transport {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        debug!(endpoint, url = %url, "Sending catalog request");

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: endpoint.to_string(),
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| CatalogError::Transport {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search_artists(&self, query: &str) -> Outcome<Vec<ArtistRef>> {
        info!(query, "Searching artists");
        let params = [
            ("q", query.to_string()),
            ("limit", self.search_limit.to_string()),
            ("fields", ARTIST_REF_FIELDS.to_string()),
        ];
        match self
            .get::<Vec<ArtistRef>>("artists/search", &params, self.timeout)
            .await
        {
            Ok(envelope) => Outcome::fetched(envelope.data),
            Err(e) => Outcome::degraded(Vec::new(), format!("Error searching artists: {e}")),
        }
    }

    async fn random_artists(&self) -> Outcome<Vec<ArtistRef>> {
        let params = [
            ("limit", self.suggestion_limit.to_string()),
            ("fields", ARTIST_REF_FIELDS.to_string()),
        ];
        match self
            .get::<Vec<ArtistRef>>("artists", &params, self.suggestion_timeout)
            .await
        {
            Ok(envelope) => Outcome::fetched(envelope.data),
            Err(e) => Outcome::degraded(
                Vec::new(),
                format!("Error fetching example artists: {e}"),
            ),
        }
    }

    async fn artist_details(&self, id: CatalogId) -> Outcome<Artist> {
        let params = [("fields", ARTIST_FIELDS.to_string())];
        match self
            .get::<Artist>(&format!("artists/{id}"), &params, self.timeout)
            .await
        {
            Ok(envelope) => {
                let mut artist = envelope.data;
                artist.id = id;
                Outcome::fetched(artist)
            }
            Err(e) => Outcome::degraded(
                Artist::unknown(id),
                format!("Error fetching artist details: {e}"),
            ),
        }
    }

    async fn artist_artworks(&self, artist_id: CatalogId, page: u32) -> Outcome<ArtworkPage> {
        debug!(artist_id, page, "Listing artworks");
        let params = [
            ("query[term][artist_id]", artist_id.to_string()),
            ("limit", self.artworks_per_page.to_string()),
            ("page", page.to_string()),
            ("fields", ARTWORK_SUMMARY_FIELDS.to_string()),
        ];
        match self
            .get::<Vec<ArtworkSummary>>("artworks/search", &params, self.timeout)
            .await
        {
            Ok(envelope) => Outcome::fetched(ArtworkPage {
                artworks: envelope.data,
                pagination: envelope.pagination,
            }),
            Err(e) => Outcome::degraded(
                ArtworkPage::default(),
                format!("Error fetching artist artworks: {e}"),
            ),
        }
    }

    async fn artwork_details(&self, id: CatalogId) -> Outcome<ArtworkDetail> {
        let params = [("fields", ARTWORK_DETAIL_FIELDS.to_string())];
        match self
            .get::<ArtworkDetail>(&format!("artworks/{id}"), &params, self.timeout)
            .await
        {
            Ok(envelope) => {
                let mut detail = envelope.data;
                detail.id = id;
                Outcome::fetched(detail)
            }
            Err(e) => Outcome::degraded(
                ArtworkDetail::empty(id),
                format!("Error fetching artwork details: {e}"),
            ),
        }
    }
}
