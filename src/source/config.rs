//! Raw source configuration
//!
//! Mirrors the `source` block of a dependency as written in YAML. Validation
//! into a [`SourceDescriptor`](super::SourceDescriptor) happens via `TryFrom`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Source block of a dependency configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    /// Git repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Commit to check out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Extra arguments for the clone
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clone_args: Vec<String>,

    pub disable_shallow: bool,

    /// Skip refreshing a source that is already cached
    pub disable_pull: bool,

    /// Remote URL or local path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
}

impl SourceConfig {
    /// Parse a source configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a source configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }
}
