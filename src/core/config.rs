//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.shelf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_STORE_BASE_URL: &str = "http://localhost:8085";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog_base_url: String,
    pub catalog_api_key: Option<String>,
    pub store_base_url: String,
    pub store_api_key: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shelf").join("config.toml"))
}

/// Load config from `~/.shelf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShelfConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShelfConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShelfConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShelfConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShelfConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Shelf Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [catalog]
# base_url = "https://www.googleapis.com/books/v1"
# api_key = "AIza..."                  # Or set SHELF_CATALOG_API_KEY env var

# [store]
# base_url = "http://localhost:8085"   # Document-store endpoint (or emulator)
# api_key = "..."                      # Or set SHELF_STORE_API_KEY env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ShelfConfig) -> ResolvedConfig {
    // Catalog base URL: env → config → default
    let catalog_base_url = std::env::var("SHELF_CATALOG_BASE_URL")
        .ok()
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string());

    // Catalog API key: env → config (the public catalog works without one)
    let catalog_api_key = std::env::var("SHELF_CATALOG_API_KEY")
        .ok()
        .or_else(|| config.catalog.api_key.clone());

    // Store base URL: env → config → default
    let store_base_url = std::env::var("SHELF_STORE_BASE_URL")
        .ok()
        .or_else(|| config.store.base_url.clone())
        .unwrap_or_else(|| DEFAULT_STORE_BASE_URL.to_string());

    // Store API key: env → config
    let store_api_key = std::env::var("SHELF_STORE_API_KEY")
        .ok()
        .or_else(|| config.store.api_key.clone());

    ResolvedConfig {
        catalog_base_url,
        catalog_api_key,
        store_base_url,
        store_api_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ShelfConfig::default();
        assert!(config.catalog.base_url.is_none());
        assert!(config.store.api_key.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ShelfConfig::default();
        let resolved = resolve(&config);
        assert_eq!(resolved.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(resolved.store_base_url, DEFAULT_STORE_BASE_URL);
        assert!(resolved.catalog_api_key.is_none());
        assert!(resolved.store_api_key.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ShelfConfig {
            catalog: CatalogConfig {
                base_url: Some("https://catalog.example/v9".to_string()),
                api_key: Some("key-123".to_string()),
            },
            store: StoreConfig {
                base_url: Some("https://store.example".to_string()),
                api_key: None,
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.catalog_base_url, "https://catalog.example/v9");
        assert_eq!(resolved.catalog_api_key.as_deref(), Some("key-123"));
        assert_eq!(resolved.store_base_url, "https://store.example");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[catalog]
base_url = "https://www.googleapis.com/books/v1"
api_key = "AIza-test"

[store]
base_url = "https://store.example"
api_key = "secret"
"#;
        let config: ShelfConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.catalog.base_url.as_deref(),
            Some("https://www.googleapis.com/books/v1")
        );
        assert_eq!(config.catalog.api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.store.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[store]
base_url = "http://localhost:9000"
"#;
        let config: ShelfConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.base_url.as_deref(), Some("http://localhost:9000"));
        assert!(config.store.api_key.is_none());
        assert!(config.catalog.base_url.is_none());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result: Result<ShelfConfig, _> = toml::from_str("[catalog\nbase_url = 3");
        assert!(result.is_err());
    }
}
