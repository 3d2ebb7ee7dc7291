//! Configuration loading, validation, and management for ArtScope.
//!
//! Loads configuration from `~/.artscope/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The root configuration structure.
///
/// Maps directly to `~/.artscope/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Museum catalog API settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Web research settings
    #[serde(default)]
    pub research: ResearchConfig,

    /// Local language model settings
    #[serde(default)]
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API root, including the trailing `/api/v1/`
    #[serde(default = "default_catalog_url")]
    pub base_url: String,

    #[serde(default = "default_catalog_timeout")]
    pub timeout_secs: u64,

    /// Timeout for the example-suggestion call
    #[serde(default = "default_suggestion_timeout")]
    pub suggestion_timeout_secs: u64,

    #[serde(default = "default_artworks_per_page")]
    pub artworks_per_page: u32,

    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u32,

    /// IIIF image service root
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Shown for artworks without an image
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image_url: String,
}

fn default_catalog_url() -> String {
    "https://api.artic.edu/api/v1/".into()
}
fn default_catalog_timeout() -> u64 {
    10
}
fn default_suggestion_timeout() -> u64 {
    5
}
fn default_artworks_per_page() -> u32 {
    5
}
fn default_search_limit() -> u32 {
    10
}
fn default_suggestion_limit() -> u32 {
    5
}
fn default_image_base_url() -> String {
    "https://www.artic.edu/iiif/2".into()
}
fn default_placeholder_image() -> String {
    "https://via.placeholder.com/300x400.png?text=No+Image+Available".into()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            timeout_secs: default_catalog_timeout(),
            suggestion_timeout_secs: default_suggestion_timeout(),
            artworks_per_page: default_artworks_per_page(),
            search_limit: default_search_limit(),
            suggestion_limit: default_suggestion_limit(),
            image_base_url: default_image_base_url(),
            placeholder_image_url: default_placeholder_image(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn suggestion_timeout(&self) -> Duration {
        Duration::from_secs(self.suggestion_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// DuckDuckGo HTML endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Characters kept per fetched page
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,

    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Sent with searches and page fetches; some sites refuse unknown agents
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_search_url() -> String {
    "https://html.duckduckgo.com/html/".into()
}
fn default_max_results() -> usize {
    3
}
fn default_excerpt_chars() -> usize {
    1500
}
fn default_page_timeout() -> u64 {
    10
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/58.0.3029.110 Safari/537.3"
        .into()
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            max_results: default_max_results(),
            excerpt_chars: default_excerpt_chars(),
            page_timeout_secs: default_page_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ResearchConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Ollama server root (no `/api` suffix)
    #[serde(default = "default_inference_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_inference_timeout")]
    pub timeout_secs: u64,
}

fn default_inference_url() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "deepseek-r1:1.5b".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_inference_timeout() -> u64 {
    120
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_inference_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_inference_timeout(),
        }
    }
}

impl InferenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.artscope/config.toml).
    ///
    /// Environment variables override the file:
    /// - `ARTSCOPE_MODEL`
    /// - `ARTSCOPE_OLLAMA_URL`
    /// - `ARTSCOPE_CATALOG_URL`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;

        if let Ok(model) = std::env::var("ARTSCOPE_MODEL") {
            config.inference.model = model;
        }
        if let Ok(url) = std::env::var("ARTSCOPE_OLLAMA_URL") {
            config.inference.base_url = url;
        }
        if let Ok(url) = std::env::var("ARTSCOPE_CATALOG_URL") {
            config.catalog.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".artscope")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("catalog.base_url", &self.catalog.base_url)?;
        check_http_url("catalog.image_base_url", &self.catalog.image_base_url)?;
        check_http_url("research.search_url", &self.research.search_url)?;
        check_http_url("inference.base_url", &self.inference.base_url)?;

        if self.catalog.artworks_per_page == 0 {
            return Err(ConfigError::ValidationError(
                "catalog.artworks_per_page must be > 0".into(),
            ));
        }

        if self.research.excerpt_chars == 0 {
            return Err(ConfigError::ValidationError(
                "research.excerpt_chars must be > 0".into(),
            ));
        }

        if self.catalog.timeout_secs == 0
            || self.catalog.suggestion_timeout_secs == 0
            || self.research.page_timeout_secs == 0
            || self.inference.timeout_secs == 0
        {
            return Err(ConfigError::ValidationError(
                "timeouts must be at least one second".into(),
            ));
        }

        if !(0.0..=2.0).contains(&self.inference.temperature) {
            return Err(ConfigError::ValidationError(
                "inference.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.inference.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "inference.model must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn check_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigError::ValidationError(format!(
            "{field} must be an http(s) URL, got scheme '{}'",
            parsed.scheme()
        ))),
        Err(e) => Err(ConfigError::ValidationError(format!(
            "{field} is not a valid URL ({value}): {e}"
        ))),
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
