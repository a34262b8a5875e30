//! Path source handling
//!
//! A path source is either a remote URL pointing directly at a configuration
//! file, or a local directory/file relative to the dependent configuration.

use serde::Serialize;

/// URL or local path source details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSource {
    pub path: String,

    /// Reuse an already downloaded file (only meaningful for URLs)
    pub disable_pull: bool,
}

impl PathSource {
    /// Create a new path source
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            disable_pull: false,
        }
    }

    /// Whether the path is a remote http(s) URL
    pub fn is_url(&self) -> bool {
        is_url(&self.path)
    }
}

/// Whether a string is an http(s) URL
pub fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
