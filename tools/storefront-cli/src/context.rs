//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_cache::FileStore;
use storefront_commerce::Storefront;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in use, if one was found.
    pub config_path: Option<PathBuf>,
    /// Overrides `storage.dir`.
    pub data_dir: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&Path>,
        data_dir: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            // Try to find config in current directory or parent directories
            None => find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
            data_dir,
        })
    }

    /// Directory holding snapshots.
    ///
    /// `--data-dir` wins; otherwise `storage.dir`, resolved against the config
    /// file's directory (or the working directory without one).
    pub fn storage_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return self.cwd.join(dir);
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(|p| self.cwd.join(p))
            .unwrap_or_else(|| self.cwd.clone());
        base.join(&self.config.storage.dir)
    }

    /// Open the stores on the file backend.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let dir = self.storage_dir();
        self.output.debug(&format!("Storage: {}", dir.display()));
        tracing::debug!(dir = %dir.display(), "opening file store");
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
        Storefront::new(store, self.config.store.clone()).context("Invalid store configuration")
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_parents() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".storefront.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, root.path().join(".storefront.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("storefront.json"), "{}").unwrap();
        std::fs::write(root.path().join("storefront.toml"), "").unwrap();

        assert_eq!(
            find_config(root.path()).unwrap(),
            root.path().join("storefront.toml")
        );
    }

    #[test]
    fn test_storage_dir_relative_to_config() {
        let ctx = Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: PathBuf::from("/work"),
            config_path: Some(PathBuf::from("/shop/storefront.toml")),
            data_dir: None,
        };
        assert_eq!(ctx.storage_dir(), PathBuf::from("/shop/.storefront"));
    }

    #[test]
    fn test_data_dir_override() {
        let ctx = Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: PathBuf::from("/work"),
            config_path: Some(PathBuf::from("/shop/storefront.toml")),
            data_dir: Some(PathBuf::from("state")),
        };
        assert_eq!(ctx.storage_dir(), PathBuf::from("/work/state"));
    }
}
