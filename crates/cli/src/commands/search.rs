//! `artscope search`: one-shot artist search.

use artscope_catalog::CatalogClient;
use artscope_core::Catalog;

use super::{CommandResult, load_config, report_notices};
use crate::render;

pub async fn run(query: &str) -> CommandResult {
    let config = load_config()?;
    let catalog = CatalogClient::new(&config.catalog)?;

    let (artists, notice) = catalog.search_artists(query).await.into_parts();
    report_notices(notice);

    if artists.is_empty() {
        println!("  No artists found matching your query.");
    } else {
        print!("{}", render::artist_list(&artists));
    }
    Ok(())
}
