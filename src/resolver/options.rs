//! Resolver configuration

use std::path::PathBuf;

use crate::cache;
use crate::error::Result;

/// File name loaded when a source names no configuration file
pub const DEFAULT_CONFIG_FILE: &str = "depsrc.yaml";

/// Settings shared by every resolution in a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Root directory of the dependency cache
    pub cache_root: PathBuf,
    pub default_config_file: String,
}

impl ResolverOptions {
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
            default_config_file: DEFAULT_CONFIG_FILE.to_string(),
        }
    }

    /// Options using the default cache root (`DEPSRC_CACHE_DIR` or `~/.depsrc/dependencies`)
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(cache::default_cache_root()?))
    }

    #[must_use]
    pub fn with_default_config_file(mut self, name: impl Into<String>) -> Self {
        self.default_config_file = name.into();
        self
    }
}
