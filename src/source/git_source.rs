//! Git source handling

use serde::Serialize;

/// Git repository source details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    /// Repository URL (HTTPS, SSH or file://), as written
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Commit SHA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clone_args: Vec<String>,

    pub disable_shallow: bool,

    /// Reuse an existing cache entry without refreshing it
    pub disable_pull: bool,
}

impl GitSource {
    /// Create a new git source
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set branch
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set revision
    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// URL used for cloning (surrounding whitespace removed)
    pub fn clone_url(&self) -> &str {
        self.url.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_url_trims() {
        let source = GitSource::new("  https://github.com/org/repo.git\n");
        assert_eq!(source.clone_url(), "https://github.com/org/repo.git");
    }

    #[test]
    fn test_builders() {
        let source = GitSource::new("https://github.com/org/repo.git")
            .with_branch("main")
            .with_tag("v1")
            .with_revision("abc123");
        assert_eq!(source.branch.as_deref(), Some("main"));
        assert_eq!(source.tag.as_deref(), Some("v1"));
        assert_eq!(source.revision.as_deref(), Some("abc123"));
    }
}
