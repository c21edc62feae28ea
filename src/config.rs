//! Runtime configuration.
//!
//! Settings come from an optional TOML file; CLI flags and environment
//! variables override individual values after loading.
//!
//! ```toml
//! [catalog]
//! data_dir = "~/catalog-data"
//!
//! [search]
//! default_limit = 10
//! cache_capacity = 128
//! ```

use crate::error::Result;
use crate::search::DEFAULT_CACHE_CAPACITY;
use anyhow::Context;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Default number of search results returned when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Directory holding the fixture files. Embedded fixtures are used when unset.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub default_limit: usize,
    /// Number of distinct queries memoized. Zero disables the cache.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Override the data directory, expanding `~`.
    pub fn with_data_dir(mut self, dir: Option<&str>) -> Self {
        if let Some(dir) = dir {
            self.catalog.data_dir = Some(PathBuf::from(expand_tilde(dir).as_ref()));
        }
        self
    }

    /// The data directory with `~` expanded, if configured.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.catalog
            .data_dir
            .as_ref()
            .map(|dir| PathBuf::from(expand_tilde(&dir.to_string_lossy()).as_ref()))
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
