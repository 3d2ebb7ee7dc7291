//! Grounding context for the conversation.
//!
//! Renders the selected artist, the selected artwork and the collected
//! research into one text block, in three fixed sections:
//!
//! | Section | Source | Missing data |
//! |---------|--------|--------------|
//! | 1. Artist | Catalog artist record | `Unknown`, `No description available` |
//! | 2. Artwork | Catalog artwork record | `Untitled`, `Unknown date`, `N/A`, ... |
//! | 3. Research | Research excerpts | Fixed "no context" sentinel |

pub mod assembler;

pub use assembler::{AssemblyInput, ContextAssembler, NO_RESEARCH_SENTINEL};
