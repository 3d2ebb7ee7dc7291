//! `artscope artworks`: one page of an artist's artworks.

use artscope_catalog::{CatalogClient, ImageUrls};
use artscope_core::Catalog;
use artscope_core::artwork::CatalogId;

use super::{CommandResult, load_config, report_notices};
use crate::render;

pub async fn run(artist_id: CatalogId, page: u32) -> CommandResult {
    let config = load_config()?;
    let catalog = CatalogClient::new(&config.catalog)?;
    let images = ImageUrls::from_config(&config.catalog);
    let page = page.max(1);

    let (listing, notice) = catalog.artist_artworks(artist_id, page).await.into_parts();
    report_notices(notice);

    if listing.artworks.is_empty() {
        println!("  No artworks found for this artist.");
        return Ok(());
    }

    let first_number = (page as usize - 1) * catalog.artworks_per_page() as usize + 1;
    print!("{}", render::artwork_list(&listing.artworks, first_number, &images));

    let pagination = &listing.pagination;
    println!(
        "\n  Page {} of {}",
        pagination.current_page.unwrap_or(page),
        pagination.total_pages.unwrap_or(1)
    );
    if pagination.has_more() {
        println!("  Next: artscope artworks {artist_id} --page {}", page + 1);
    }
    Ok(())
}
