//! Catalog domain types: artists, artworks, and pagination.
//!
//! Field names follow the catalog's JSON so the types deserialize straight
//! from the `data` member of a response envelope. Every optional field stays
//! `Option` here; the display accessors substitute the literal defaults.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Catalog-assigned identifier for artists and artworks.
pub type CatalogId = u64;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN: &str = "Unknown";
pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_DATE: &str = "Unknown date";
pub const UNKNOWN_MEDIUM: &str = "Unknown medium";
pub const NOT_AVAILABLE: &str = "N/A";

/// A search hit or suggestion: just enough to pick an artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: CatalogId,
    #[serde(default = "unknown_artist", deserialize_with = "title_or_unknown")]
    pub title: String,
}

/// Full artist record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: CatalogId,

    #[serde(default = "unknown_artist", deserialize_with = "title_or_unknown")]
    pub title: String,

    /// The catalog sends years as numbers; kept as text.
    #[serde(default, deserialize_with = "lenient_string")]
    pub birth_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub death_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

impl Artist {
    /// The value handed out when the catalog cannot be reached.
    pub fn unknown(id: CatalogId) -> Self {
        Self {
            id,
            title: unknown_artist(),
            birth_date: None,
            death_date: None,
            description: None,
        }
    }

    /// `"{birth} - {death}"` with `Unknown` for missing years.
    pub fn lifespan(&self) -> String {
        format!(
            "{} - {}",
            self.birth_date.as_deref().unwrap_or(UNKNOWN),
            self.death_date.as_deref().unwrap_or(UNKNOWN)
        )
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

/// One entry of a paginated artwork listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkSummary {
    pub id: CatalogId,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub image_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date_display: Option<String>,
}

impl ArtworkSummary {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }
}

/// Full artwork record for the selected artwork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDetail {
    /// Not requested from the catalog; the client fills in the id it asked for.
    #[serde(default)]
    pub id: CatalogId,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub artist_title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date_display: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub medium_display: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub dimensions: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub image_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub style_titles: Vec<String>,
}

impl ArtworkDetail {
    /// The empty record handed out when the catalog cannot be reached.
    pub fn empty(id: CatalogId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Whether the catalog returned anything usable.
    pub fn is_known(&self) -> bool {
        self.title.is_some()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn artist_title(&self) -> &str {
        self.artist_title.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn date_display(&self) -> &str {
        self.date_display.as_deref().unwrap_or(UNKNOWN_DATE)
    }

    pub fn medium_display(&self) -> &str {
        self.medium_display.as_deref().unwrap_or(UNKNOWN_MEDIUM)
    }

    pub fn dimensions(&self) -> &str {
        self.dimensions.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Comma-joined style titles; empty string when there are none.
    pub fn styles(&self) -> String {
        self.style_titles.join(", ")
    }
}

/// The pagination member of a listing envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl Pagination {
    /// Missing fields count as page 1 of 1.
    pub fn has_more(&self) -> bool {
        self.current_page.unwrap_or(1) < self.total_pages.unwrap_or(1)
    }
}

/// One page of an artist's artworks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub artworks: Vec<ArtworkSummary>,
    pub pagination: Pagination,
}

/// Where the artwork listing stands.
///
/// `has_more` is true iff the last fetched page reported
/// `current_page < total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    pub current_page: u32,
    pub has_more: bool,
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            has_more: true,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Record the pagination of a page that was just loaded.
    pub fn record(&mut self, pagination: &Pagination) {
        self.has_more = pagination.has_more();
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_artist() -> String {
    UNKNOWN_ARTIST.into()
}

/// Accepts strings and numbers; null, blank, and other shapes become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn title_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_else(unknown_artist))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
