//! `artscope config`: Configuration management commands.

use artscope_config::AppConfig;

use super::CommandResult;

pub async fn validate() -> CommandResult {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();
            if !AppConfig::config_path().exists() {
                warnings.push("No config file; built-in defaults are in use (run `artscope onboard`)");
            }
            if config.research.max_results == 0 {
                warnings.push("research.max_results is 0; no web research will be collected");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Catalog:   {}", config.catalog.base_url);
            println!("   Search:    {}", config.research.search_url);
            println!("   Ollama:    {}", config.inference.base_url);
            println!("   Model:     {}", config.inference.model);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> CommandResult {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path() {
    println!("{}", AppConfig::config_path().display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_valid() {
        let path = AppConfig::config_path();
        assert!(path.to_str().unwrap().ends_with("config.toml"));
        assert!(path.starts_with(AppConfig::config_dir()));
    }

    #[test]
    fn default_config_renders_as_toml() {
        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[inference]"));
    }
}
