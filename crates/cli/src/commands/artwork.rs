//! `artscope artwork`: one artwork's detail panel.

use artscope_catalog::{CatalogClient, ImageUrls};
use artscope_core::Catalog;
use artscope_core::artwork::CatalogId;
use artscope_research::ResearchCollector;

use super::{CommandResult, load_config, report_notices};
use crate::render;

pub async fn run(id: CatalogId, artist_id: Option<CatalogId>, research: bool) -> CommandResult {
    let config = load_config()?;
    let catalog = CatalogClient::new(&config.catalog)?;
    let images = ImageUrls::from_config(&config.catalog);

    let (artwork, notice) = catalog.artwork_details(id).await.into_parts();
    report_notices(notice);

    let artist = match artist_id {
        Some(artist_id) => {
            let (artist, notice) = catalog.artist_details(artist_id).await.into_parts();
            report_notices(notice);
            Some(artist)
        }
        None => None,
    };

    let excerpts = if research {
        let collector = ResearchCollector::from_config(&config.research)?;
        let artist_name = artist
            .as_ref()
            .map(|a| a.title.clone())
            .unwrap_or_else(|| artwork.artist_title().to_string());
        eprintln!("  Researching...");
        let (excerpts, notice) = collector.collect(artwork.title(), &artist_name).await.into_parts();
        report_notices(notice);
        excerpts
    } else {
        Vec::new()
    };

    print!(
        "{}",
        render::artwork_panel(&artwork, artist.as_ref(), &excerpts, &images, true)
    );
    Ok(())
}
