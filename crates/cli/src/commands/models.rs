//! `artscope models`: models installed on the inference server.

use super::{CommandResult, load_config};

pub async fn run() -> CommandResult {
    let config = load_config()?;
    let provider = artscope_providers::build_from_config(&config.inference)?;

    let models = provider
        .list_models()
        .await
        .map_err(|e| format!("Could not reach {}: {e}", config.inference.base_url))?;

    if models.is_empty() {
        println!("  No models installed. Pull one with `ollama pull {}`.", config.inference.model);
        return Ok(());
    }

    for model in &models {
        let marker = if *model == config.inference.model { "*" } else { " " };
        println!("  {marker} {model}");
    }
    if !models.contains(&config.inference.model) {
        println!("\n  Configured model '{}' is not installed.", config.inference.model);
    }
    Ok(())
}
