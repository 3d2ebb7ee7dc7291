//! Museum catalog client for ArtScope.
//!
//! Wraps the catalog's read-only HTTP API (artist search, artist detail,
//! paginated artwork listing, artwork detail) behind the
//! `artscope_core::Catalog` trait, and renders IIIF image URLs.

pub mod client;
pub mod image;

pub use client::CatalogClient;
pub use image::{DETAIL_WIDTH, ImageUrls, THUMBNAIL_WIDTH};
