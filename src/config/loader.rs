use super::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Layers configuration sources: defaults, then a TOML file, then the
/// environment. Later layers win.
pub struct ConfigLoader {
    config: Config,
    source: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            source: None,
        }
    }

    /// Loads `path`, which must exist.
    pub async fn load_file(mut self, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).await?;
        self.config = Config::from_toml_str(&content)?;
        self.source = Some(path.to_path_buf());
        debug!("Loaded configuration from {}", path.display());
        Ok(self)
    }

    /// Loads `syracuse.toml` from `dir` if it is present.
    pub async fn load_project(self, dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            self.load_file(&path).await
        } else {
            Ok(self)
        }
    }

    pub fn merge_env(mut self) -> Result<Self> {
        self.config.merge_env_vars()?;
        Ok(self)
    }

    pub fn merge_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.config.merge_env_with(lookup)?;
        Ok(self)
    }

    /// Path of the file the configuration was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Loads configuration the way the server does at startup: the explicit
/// file if given, otherwise `syracuse.toml` in the working directory, then
/// `SYRACUSE_*` environment overrides.
pub async fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loader = ConfigLoader::new();
    let loader = match explicit {
        Some(path) => loader.load_file(path).await?,
        None => loader.load_project(&std::env::current_dir()?).await?,
    };
    Ok(loader.merge_env()?.into_config())
}
