use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};
use crate::filesystem::{FileSystem, RealFileSystem};

use super::ReportConfig;
use super::validation::validate_config;

/// A loaded configuration plus the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: ReportConfig,
    /// `None` when the built-in layout was used.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = "hepplot.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `hepplot.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. The built-in layout ([`ReportConfig::default`])
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Parse and validate TOML content; built-in sources fill any gaps.
    ///
    /// # Errors
    /// Returns an error on TOML syntax errors or failed validation.
    pub fn parse_config(content: &str) -> Result<ReportConfig> {
        let mut config: ReportConfig = toml::from_str(content)?;
        config.fill_default_sources();
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
        }

        tracing::debug!("no config file found, using built-in layout");
        Ok(LoadResult {
            config: ReportConfig::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.fs.read_to_string(path).map_err(|e| {
            PlotError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config = Self::parse_config(&content)?;
        tracing::info!(path = %path.display(), pages = config.pages.len(), "loaded config");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
