//! Context assembly: artist, artwork and research rendered as one prompt block.
//!
//! # Determinism
//!
//! Assembly is a pure function of its inputs: identical inputs always produce
//! identical output. There is no I/O, no clock, and no failure path; every
//! missing field renders as its literal default.

use artscope_core::artwork::{Artist, ArtworkDetail};
use artscope_core::research::ResearchExcerpt;

/// Rendered in place of the research section when no excerpt was collected.
pub const NO_RESEARCH_SENTINEL: &str = "No additional research context was found for this artwork.";

/// All inputs required by the assembler.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub artist: &'a Artist,
    pub artwork: &'a ArtworkDetail,
    /// Excerpts in search rank order.
    pub research: &'a [ResearchExcerpt],
}

/// Builds the grounding block handed to the conversation engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAssembler;

impl ContextAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Render all three sections, separated by a blank line.
    pub fn assemble(&self, input: &AssemblyInput<'_>) -> String {
        [
            Self::render_artist(input.artist),
            Self::render_artwork(input.artwork),
            Self::render_research(input.research),
        ]
        .join("\n\n")
    }

    fn render_artist(artist: &Artist) -> String {
        format!(
            "ARTIST INFORMATION:\nName: {}\nLifespan: {}\nDescription: {}",
            artist.title,
            artist.lifespan(),
            artist.description()
        )
    }

    fn render_artwork(artwork: &ArtworkDetail) -> String {
        format!(
            "ARTWORK INFORMATION:\nTitle: {}\nDate: {}\nMedium: {}\nDimensions: {}\nStyles: {}",
            artwork.title(),
            artwork.date_display(),
            artwork.medium_display(),
            artwork.dimensions(),
            artwork.styles()
        )
    }

    fn render_research(research: &[ResearchExcerpt]) -> String {
        if research.is_empty() {
            return format!("RESEARCH CONTEXT:\n{NO_RESEARCH_SENTINEL}");
        }

        let blocks: Vec<String> = research
            .iter()
            .enumerate()
            .map(|(idx, excerpt)| {
                format!("Source {} ({}):\n{}", idx + 1, excerpt.source, excerpt.content)
            })
            .collect();
        format!("RESEARCH CONTEXT:\n{}", blocks.join("\n\n"))
    }
}
