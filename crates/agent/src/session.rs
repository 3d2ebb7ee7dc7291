//! Session state and the navigator that drives it.
//!
//! A session walks three screens: pick an artist, browse their artworks,
//! then discuss one artwork. All of it lives in one [`SessionState`] value
//! owned by the [`SessionNavigator`]; resetting replaces that value.

use std::sync::Arc;

use artscope_core::artwork::{
    Artist, ArtistRef, ArtworkDetail, ArtworkSummary, CatalogId, PaginationCursor,
};
use artscope_core::message::Transcript;
use artscope_core::research::ResearchExcerpt;
use artscope_core::{Catalog, Outcome};
use artscope_research::ResearchCollector;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::context::{AssemblyInput, ContextAssembler};
use crate::conversation::ConversationEngine;

/// Which screen the session is on, derived from what has been selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    ArtistSelection,
    ArtworkBrowser,
    Analysis,
}

/// Everything one browsing session knows.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: String,
    pub suggestions: Vec<ArtistRef>,
    pub selected_artist: Option<Artist>,
    pub artworks: Vec<ArtworkSummary>,
    pub cursor: PaginationCursor,
    pub selected_artwork: Option<ArtworkDetail>,
    /// Replaced, never merged, on each artwork selection.
    pub research: Vec<ResearchExcerpt>,
    pub transcript: Transcript,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            suggestions: Vec::new(),
            selected_artist: None,
            artworks: Vec::new(),
            cursor: PaginationCursor::new(),
            selected_artwork: None,
            research: Vec::new(),
            transcript: Transcript::new(),
        }
    }

    /// An open artwork means analysis, even when it was opened by id
    /// without picking an artist first.
    pub fn screen(&self) -> Screen {
        match (&self.selected_artist, &self.selected_artwork) {
            (_, Some(_)) => Screen::Analysis,
            (Some(_), None) => Screen::ArtworkBrowser,
            (None, None) => Screen::ArtistSelection,
        }
    }

    /// The grounding block for the open artwork, if there is one.
    ///
    /// Without a selected artist the artist section names the artwork's
    /// credited artist and nothing else.
    pub fn context(&self) -> Option<String> {
        let artwork = self.selected_artwork.as_ref()?;
        let credited;
        let artist = match &self.selected_artist {
            Some(artist) => artist,
            None => {
                credited = Artist {
                    title: artwork.artist_title().to_string(),
                    ..Artist::unknown(0)
                };
                &credited
            }
        };
        Some(ContextAssembler::new().assemble(&AssemblyInput {
            artist,
            artwork,
            research: &self.research,
        }))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a session through the catalog, research and conversation components.
///
/// Degraded results never stop the session: their values are used as-is and
/// their notices are queued for the interface to show (see
/// [`SessionNavigator::take_notices`]).
pub struct SessionNavigator {
    catalog: Arc<dyn Catalog>,
    research: ResearchCollector,
    engine: ConversationEngine,
    state: SessionState,
    notices: Vec<String>,
}

impl SessionNavigator {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        research: ResearchCollector,
        engine: ConversationEngine,
    ) -> Self {
        Self {
            catalog,
            research,
            engine,
            state: SessionState::new(),
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn engine(&self) -> &ConversationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ConversationEngine {
        &mut self.engine
    }

    /// Drain the notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn absorb<T>(&mut self, outcome: Outcome<T>) -> T {
        let (value, notice) = outcome.into_parts();
        if let Some(notice) = notice {
            self.notices.push(notice);
        }
        value
    }

    /// Fetch a few example artists for the first screen.
    pub async fn suggestions(&mut self) -> &[ArtistRef] {
        let outcome = self.catalog.random_artists().await;
        self.state.suggestions = self.absorb(outcome);
        &self.state.suggestions
    }

    /// Matching artists for a query. Selection state is untouched.
    pub async fn search_artists(&mut self, query: &str) -> Vec<ArtistRef> {
        let outcome = self.catalog.search_artists(query).await;
        self.absorb(outcome)
    }

    /// Select an artist and load the first page of their artworks.
    ///
    /// Everything derived from a previous artist is dropped first.
    pub async fn select_artist(&mut self, id: CatalogId) {
        let outcome = self.catalog.artist_details(id).await;
        let artist = self.absorb(outcome);
        info!(artist_id = id, title = %artist.title, "Artist selected");

        self.state.selected_artist = Some(artist);
        self.state.artworks.clear();
        self.state.cursor.reset();
        self.state.selected_artwork = None;
        self.state.research.clear();
        self.state.transcript.clear();

        self.load_first_page().await;
    }

    /// Load the cursor's page if nothing is listed yet and more is available.
    ///
    /// Returns the number of artworks listed afterwards.
    pub async fn load_first_page(&mut self) -> usize {
        let Some(artist_id) = self.state.selected_artist.as_ref().map(|a| a.id) else {
            return 0;
        };
        if !self.state.artworks.is_empty() || !self.state.cursor.has_more {
            return self.state.artworks.len();
        }

        let outcome = self
            .catalog
            .artist_artworks(artist_id, self.state.cursor.current_page)
            .await;
        let page = self.absorb(outcome);

        self.state.cursor.record(&page.pagination);
        self.state.artworks = page.artworks;
        debug!(
            count = self.state.artworks.len(),
            has_more = self.state.cursor.has_more,
            "First page loaded"
        );
        self.state.artworks.len()
    }

    /// Append the next page. A no-op once the catalog reported the last page.
    ///
    /// An empty page ends the listing. Returns the number of artworks listed.
    pub async fn load_more(&mut self) -> usize {
        let Some(artist_id) = self.state.selected_artist.as_ref().map(|a| a.id) else {
            return 0;
        };
        if !self.state.cursor.has_more {
            return self.state.artworks.len();
        }

        self.state.cursor.current_page += 1;
        let outcome = self
            .catalog
            .artist_artworks(artist_id, self.state.cursor.current_page)
            .await;
        let page = self.absorb(outcome);

        if page.artworks.is_empty() {
            self.state.cursor.has_more = false;
        } else {
            self.state.artworks.extend(page.artworks);
            self.state.cursor.record(&page.pagination);
        }
        debug!(
            page = self.state.cursor.current_page,
            count = self.state.artworks.len(),
            has_more = self.state.cursor.has_more,
            "Loaded more artworks"
        );
        self.state.artworks.len()
    }

    /// Select an artwork, research it, and start a fresh transcript.
    pub async fn select_artwork(&mut self, id: CatalogId) {
        let outcome = self.catalog.artwork_details(id).await;
        let artwork = self.absorb(outcome);

        let artist_name = match &self.state.selected_artist {
            Some(artist) => artist.title.clone(),
            None => artwork.artist_title().to_string(),
        };
        info!(artwork_id = id, title = artwork.title(), "Artwork selected");

        let outcome = self.research.collect(artwork.title(), &artist_name).await;
        self.state.research = self.absorb(outcome);
        self.state.selected_artwork = Some(artwork);
        self.state.transcript.clear();
    }

    /// Ask about the open artwork. `None` until an artwork is selected.
    pub async fn ask(&mut self, message: &str) -> Option<String> {
        let context = self.state.context()?;
        let answer = self
            .engine
            .submit_turn(&mut self.state.transcript, &context, message)
            .await;
        Some(answer)
    }

    /// Start over with a fresh session.
    pub fn reset(&mut self) {
        self.state = SessionState::new();
        self.notices.clear();
        info!(session = %self.state.id, "Session reset");
    }
}
