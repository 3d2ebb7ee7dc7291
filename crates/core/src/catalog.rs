//! Catalog trait: the abstraction over the museum's read-only API.
//!
//! Every operation is total: failures come back as
//! [`Outcome::Degraded`](crate::Outcome) carrying the documented default,
//! never as an error. No retries and no caching; a repeated call re-fetches.

use async_trait::async_trait;

use crate::artwork::{Artist, ArtistRef, ArtworkDetail, ArtworkPage, CatalogId};
use crate::outcome::Outcome;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Top matches for a free-text artist query. Default: empty.
    async fn search_artists(&self, query: &str) -> Outcome<Vec<ArtistRef>>;

    /// A handful of artists to suggest as example searches. Default: empty.
    async fn random_artists(&self) -> Outcome<Vec<ArtistRef>>;

    /// Full artist record. Default: [`Artist::unknown`].
    async fn artist_details(&self, id: CatalogId) -> Outcome<Artist>;

    /// One page of the artist's artworks. Default: empty page, empty pagination.
    async fn artist_artworks(&self, artist_id: CatalogId, page: u32) -> Outcome<ArtworkPage>;

    /// Full artwork record. Default: [`ArtworkDetail::empty`].
    async fn artwork_details(&self, id: CatalogId) -> Outcome<ArtworkDetail>;
}
