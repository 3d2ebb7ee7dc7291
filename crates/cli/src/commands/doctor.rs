//! `artscope doctor`: Diagnose configuration and connectivity.

use std::sync::Arc;

use artscope_catalog::CatalogClient;
use artscope_config::AppConfig;
use artscope_core::{Catalog, Provider};

use super::CommandResult;

pub async fn run() -> CommandResult {
    println!("🩺 ArtScope Doctor — System Diagnostics");
    println!("=======================================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_path();
    let config = match AppConfig::load() {
        Ok(config) => {
            if config_path.exists() {
                println!("  ✅ Config file valid");
            } else {
                println!("  ⚠️  No config file — using defaults (run `artscope onboard`)");
            }
            config
        }
        Err(e) => {
            println!("  ❌ Config file invalid: {e}");
            println!("\n  ⚠️  1 issue(s) found. See above for details.");
            return Ok(());
        }
    };

    // Catalog
    let catalog = CatalogClient::new(&config.catalog)?;
    let reachability = catalog.random_artists().await;
    match reachability.notice() {
        None => println!("  ✅ Catalog reachable ({})", config.catalog.base_url),
        Some(notice) => {
            println!("  ❌ Catalog unreachable: {notice}");
            issues += 1;
        }
    }

    // Inference server
    let provider: Arc<dyn Provider> = artscope_providers::build_from_config(&config.inference)?;
    match provider.health_check().await {
        Ok(true) => {
            println!("  ✅ Ollama reachable ({})", config.inference.base_url);
            match provider.list_models().await {
                Ok(models) if models.contains(&config.inference.model) => {
                    println!("  ✅ Model '{}' installed", config.inference.model);
                }
                Ok(_) => {
                    println!(
                        "  ⚠️  Model '{}' not installed — run `ollama pull {}`",
                        config.inference.model, config.inference.model
                    );
                    issues += 1;
                }
                Err(e) => {
                    println!("  ⚠️  Could not list models: {e}");
                    issues += 1;
                }
            }
        }
        Ok(false) => {
            println!("  ❌ Ollama answered with an error ({})", config.inference.base_url);
            issues += 1;
        }
        Err(e) => {
            println!("  ❌ Ollama unreachable: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
