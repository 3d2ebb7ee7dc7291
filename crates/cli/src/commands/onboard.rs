//! `artscope onboard`: First-time setup.

use artscope_config::AppConfig;

use super::CommandResult;

pub async fn run() -> CommandResult {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();

    println!("🎨 ArtScope — First-Time Setup");
    println!("==============================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Install Ollama and run: ollama pull {}", AppConfig::default().inference.model);
        println!("   2. Run: artscope doctor");
        println!("   3. Run: artscope explore\n");
    }

    println!("🎉 Setup complete! Run `artscope` to start exploring.\n");

    Ok(())
}
