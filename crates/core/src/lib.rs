//! # ArtScope Core
//!
//! Domain types, traits, and error definitions for the ArtScope artwork explorer.
//! This crate has **no I/O**: it defines the domain model that the catalog,
//! research, provider and agent crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is a trait here:
//! - [`Catalog`]: the museum catalog API
//! - [`SearchProvider`]: the web search engine behind research collection
//! - [`Provider`]: the language model used for conversation
//!
//! Implementations live in their respective crates, so each one can be
//! swapped for a scripted fake in tests.

pub mod artwork;
pub mod catalog;
pub mod error;
pub mod message;
pub mod outcome;
pub mod provider;
pub mod research;

// Re-export key types at crate root for ergonomics
pub use artwork::{
    Artist, ArtistRef, ArtworkDetail, ArtworkPage, ArtworkSummary, CatalogId, Pagination,
    PaginationCursor,
};
pub use catalog::Catalog;
pub use error::{CatalogError, Error, ProviderError, ResearchError, Result};
pub use message::{Message, Role, Transcript, TranscriptId};
pub use outcome::Outcome;
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use research::{ResearchExcerpt, SearchHit, SearchProvider};
