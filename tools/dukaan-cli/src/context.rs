//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(path.to_path_buf())),
            None => match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(&config_path) {
                        Ok(config) => return Some((config_path, config)),
                        Err(err) => {
                            tracing::warn!(path = %config_path.display(), error = %err, "skipping unreadable config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Path of the session state file.
    pub fn state_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.state_file)
    }

    /// Resolve a path relative to the config's directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join(".dukaan.toml"),
            "[storefront]\ndeal_threshold = 40\n",
        )
        .unwrap();

        let (path, config) = Context::find_config(&nested).unwrap();
        assert_eq!(path, dir.path().join(".dukaan.toml"));
        assert_eq!(config.storefront.deal_threshold, 40);
    }

    #[test]
    fn test_state_path_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("dukaan.toml");
        std::fs::write(&config_path, "[storage]\nstate_file = \"state/cart.json\"\n").unwrap();

        let ctx = Context::load(Some(&config_path), Output::new(false, true)).unwrap();
        assert_eq!(ctx.state_path(), dir.path().join("state").join("cart.json"));
    }
}
