//! The conversational half of ArtScope.
//!
//! A session moves through three screens:
//!
//! 1. **Pick an artist** (search, or one of the suggestions)
//! 2. **Browse artworks** page by page
//! 3. **Discuss one artwork**: research is collected, the context block is
//!    assembled, and each question goes to the model with the full transcript
//!
//! The [`SessionNavigator`] owns the state for all three; the
//! [`ConversationEngine`] and [`ContextAssembler`] are usable on their own.

pub mod context;
pub mod conversation;
pub mod reasoning;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use context::{AssemblyInput, ContextAssembler, NO_RESEARCH_SENTINEL};
pub use conversation::{ConversationEngine, ERROR_PREFIX, PERSONA, system_prompt};
pub use reasoning::strip_reasoning;
pub use session::{Screen, SessionNavigator, SessionState};
