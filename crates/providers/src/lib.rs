//! Language model provider implementations for ArtScope.
//!
//! All providers implement the `artscope_core::Provider` trait. The
//! conversation engine only ever sees the trait object.

pub mod ollama;

use std::sync::Arc;

use artscope_config::InferenceConfig;
use artscope_core::Provider;

pub use ollama::OllamaProvider;

/// Build the provider described by the `[inference]` section.
pub fn build_from_config(config: &InferenceConfig) -> artscope_core::Result<Arc<dyn Provider>> {
    let provider = OllamaProvider::new(&config.base_url, config.timeout())?;
    tracing::debug!(base_url = %config.base_url, model = %config.model, "Inference provider ready");
    Ok(Arc::new(provider))
}
