//! Error types for the ArtScope domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.
//!
//! Catalog and research errors never escape their components: they are
//! converted into an [`Outcome::Degraded`](crate::Outcome) at the boundary.
//! They still exist as types so the notice text and the logs agree.

use thiserror::Error;

/// The top-level error type for all ArtScope operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Catalog errors ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Research errors ---
    #[error("Research error: {0}")]
    Research(#[from] ResearchError),

    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Network failure or timeout talking to the catalog.
    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {status_code} for {endpoint}")]
    Status { endpoint: String, status_code: u16 },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum ResearchError {
    #[error("Web search failed: {0}")]
    Search(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}
