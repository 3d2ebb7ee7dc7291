//! Terminal rendering for catalog data.

use artscope_catalog::ImageUrls;
use artscope_core::artwork::{Artist, ArtistRef, ArtworkDetail, ArtworkSummary, NOT_AVAILABLE};
use artscope_core::research::ResearchExcerpt;

const MISSING_YEAR: &str = "?";

/// Numbered artist list, starting at 1.
pub fn artist_list(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .enumerate()
        .map(|(idx, artist)| format!("  {:>2}. {}  [id {}]\n", idx + 1, artist.title, artist.id))
        .collect()
}

/// Numbered artwork list. `first_number` is the number of `artworks[0]`.
pub fn artwork_list(artworks: &[ArtworkSummary], first_number: usize, images: &ImageUrls) -> String {
    artworks
        .iter()
        .enumerate()
        .map(|(idx, artwork)| {
            format!(
                "  {:>2}. {} ({})  [id {}]\n      {}\n",
                first_number + idx,
                artwork.title(),
                artwork.date_display.as_deref().unwrap_or("n.d."),
                artwork.id,
                images.thumbnail(artwork.image_id.as_deref())
            )
        })
        .collect()
}

/// The artwork detail panel, followed by the research sources.
pub fn artwork_panel(
    artwork: &ArtworkDetail,
    artist: Option<&Artist>,
    research: &[ResearchExcerpt],
    images: &ImageUrls,
    with_content: bool,
) -> String {
    let styles = if artwork.style_titles.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        artwork.styles()
    };

    let mut out = format!(
        "  Details: {}\n\n  Artist:      {}\n  Date:        {}\n  Medium:      {}\n  Dimensions:  {}\n  Style:       {}\n",
        artwork.title(),
        artwork.artist_title(),
        artwork.date_display(),
        artwork.medium_display(),
        artwork.dimensions(),
        styles
    );

    if let Some(artist) = artist {
        out.push_str(&format!(
            "  Lifespan:    {} - {}\n",
            artist.birth_date.as_deref().unwrap_or(MISSING_YEAR),
            artist.death_date.as_deref().unwrap_or(MISSING_YEAR)
        ));
    }
    out.push_str(&format!(
        "  Image:       {}\n",
        images.detail(artwork.image_id.as_deref())
    ));

    if !research.is_empty() {
        out.push_str("\n  Research Context\n");
        for (idx, excerpt) in research.iter().enumerate() {
            out.push_str(&format!("  Source {}: {}\n", idx + 1, excerpt.source));
            if with_content {
                for line in excerpt.content.lines() {
                    out.push_str(&format!("      {line}\n"));
                }
            }
        }
    }

    out
}

/// An assistant reply, prefixed line by line.
pub fn assistant_reply(answer: &str) -> String {
    answer
        .lines()
        .map(|line| format!("  Assistant > {line}\n"))
        .collect()
}
