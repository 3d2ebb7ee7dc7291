//! Subcommand implementations.

pub mod artwork;
pub mod artworks;
pub mod config_cmd;
pub mod doctor;
pub mod explore;
pub mod models;
pub mod onboard;
pub mod search;

use std::sync::Arc;

use artscope_agent::{ConversationEngine, SessionNavigator};
use artscope_catalog::CatalogClient;
use artscope_config::AppConfig;
use artscope_research::ResearchCollector;
use tracing::debug;

pub type CommandResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn load_config() -> CommandResult<AppConfig> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    Ok(config)
}

/// Wire the catalog, research and conversation components for a session.
pub fn build_navigator(config: &AppConfig) -> CommandResult<SessionNavigator> {
    let catalog = Arc::new(CatalogClient::new(&config.catalog)?);
    let research = ResearchCollector::from_config(&config.research)?;
    let provider = artscope_providers::build_from_config(&config.inference)?;
    let engine = ConversationEngine::from_config(provider, &config.inference);
    debug!(
        catalog = %config.catalog.base_url,
        model = %config.inference.model,
        "Session components ready"
    );
    Ok(SessionNavigator::new(catalog, research, engine))
}

/// Print degraded-result notices to stderr.
pub fn report_notices(notices: impl IntoIterator<Item = String>) {
    for notice in notices {
        eprintln!("  ⚠️  {notice}");
    }
}
