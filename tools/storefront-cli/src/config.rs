//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::StoreConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart and wishlist settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where snapshots are written.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse TOML or JSON config text.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        let config: CliConfig = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        config.store.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Snapshot storage location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for snapshot files, relative to the config file.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".storefront")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "pretty" or "json".
    #[serde(default = "default_format")]
    pub format: String,

    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            level: default_level(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront client state configuration

[store]
currency = "ARS"
namespace = "storefront"
# "immediate" writes after every change, "deferred" writes once per command
persist_mode = "immediate"
# "unbounded" or "clamp_to_snapshot"
stock_policy = "unbounded"

[storage]
dir = ".storefront"

[logging]
# "pretty" or "json"
format = "pretty"
level = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::cart::StockPolicy;
    use storefront_commerce::{Currency, PersistMode};

    #[test]
    fn test_default_config_parses() {
        let config = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config.store.currency, Currency::ARS);
        assert_eq!(config.store.persist_mode, PersistMode::Immediate);
        assert_eq!(config.store.stock_policy, StockPolicy::Unbounded);
        assert_eq!(config.storage.dir, PathBuf::from(".storefront"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("", false).unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            r#"{"store":{"stock_policy":"clamp_to_snapshot"},"storage":{"dir":"/tmp/shop"}}"#,
            true,
        )
        .unwrap();
        assert_eq!(config.store.stock_policy, StockPolicy::ClampToSnapshot);
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/shop"));
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let err = CliConfig::parse("[store]\nnamespace = \"a b\"\n", false);
        assert!(err.is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");

        let mut config = CliConfig::default();
        config.store.persist_mode = PersistMode::Deferred;
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.store.persist_mode, PersistMode::Deferred);
    }
}
