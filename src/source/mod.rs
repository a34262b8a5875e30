//! Dependency source handling
//!
//! A dependency comes from exactly one of two places:
//! - A git repository: `git: https://github.com/org/repo.git` with optional branch, tag or revision
//! - A path: either a remote URL (`https://example.com/depsrc.yaml`) or a local directory/file
//!
//! ## Module Organization
//!
//! - `config.rs`: `SourceConfig`, the raw shape found in dependency configuration files
//! - `git_source.rs`: `GitSource` for version-control sources
//! - `path_source.rs`: `PathSource` for URL and local path sources
//! - `var.rs`: `DependencyVar` name/value pairs

pub mod config;
pub mod git_source;
pub mod path_source;
pub mod var;

use serde::Serialize;

use crate::error::DepsrcError;

pub use config::SourceConfig;
pub use git_source::GitSource;
pub use path_source::PathSource;
pub use var::DependencyVar;

/// Where a dependency comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceKind {
    /// Git repository source
    Git(GitSource),
    /// Remote URL or local path source
    Path(PathSource),
}

/// A validated dependency source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDescriptor {
    pub kind: SourceKind,

    /// Directory within the resolved root to treat as the dependency root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,

    /// Explicit configuration file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
}

impl SourceDescriptor {
    /// Create a descriptor for a git repository
    pub fn git(source: GitSource) -> Self {
        Self {
            kind: SourceKind::Git(source),
            sub_path: None,
            config_name: None,
        }
    }

    /// Create a descriptor for a URL or local path
    pub fn path(source: PathSource) -> Self {
        Self {
            kind: SourceKind::Path(source),
            sub_path: None,
            config_name: None,
        }
    }

    /// Set sub path
    #[must_use]
    pub fn with_sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// Set config file name
    #[must_use]
    pub fn with_config_name(mut self, config_name: impl Into<String>) -> Self {
        self.config_name = Some(config_name.into());
        self
    }
}

impl TryFrom<SourceConfig> for SourceDescriptor {
    type Error = DepsrcError;

    fn try_from(config: SourceConfig) -> Result<Self, Self::Error> {
        let sub_path = non_empty(config.sub_path);
        let config_name = non_empty(config.config_name);

        let kind = if let Some(url) = non_empty(config.git) {
            SourceKind::Git(GitSource {
                url,
                branch: non_empty(config.branch),
                tag: non_empty(config.tag),
                revision: non_empty(config.revision),
                clone_args: config.clone_args,
                disable_shallow: config.disable_shallow,
                disable_pull: config.disable_pull,
            })
        } else if let Some(path) = non_empty(config.path) {
            SourceKind::Path(PathSource {
                path,
                disable_pull: config.disable_pull,
            })
        } else {
            return Err(DepsrcError::MissingSource);
        };

        Ok(Self {
            kind,
            sub_path,
            config_name,
        })
    }
}

impl TryFrom<&SourceConfig> for SourceDescriptor {
    type Error = DepsrcError;

    fn try_from(config: &SourceConfig) -> Result<Self, Self::Error> {
        Self::try_from(config.clone())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_missing_source() {
        let result = SourceDescriptor::try_from(SourceConfig::default());
        assert!(matches!(result, Err(DepsrcError::MissingSource)));
    }

    #[test]
    fn test_blank_fields_are_missing_source() {
        let config = SourceConfig {
            git: Some("   ".to_string()),
            path: Some(String::new()),
            ..SourceConfig::default()
        };
        assert!(matches!(
            SourceDescriptor::try_from(config),
            Err(DepsrcError::MissingSource)
        ));
    }

    #[test]
    fn test_git_config_converts() {
        let config = SourceConfig {
            git: Some("https://github.com/org/repo.git".to_string()),
            branch: Some("main".to_string()),
            tag: Some(String::new()),
            sub_path: Some("deploy".to_string()),
            disable_pull: true,
            ..SourceConfig::default()
        };
        let descriptor = SourceDescriptor::try_from(config).unwrap();
        let SourceKind::Git(git) = &descriptor.kind else {
            unreachable!("expected git source");
        };
        assert_eq!(git.url, "https://github.com/org/repo.git");
        assert_eq!(git.branch.as_deref(), Some("main"));
        assert_eq!(git.tag, None);
        assert!(git.disable_pull);
        assert_eq!(descriptor.sub_path.as_deref(), Some("deploy"));
    }

    #[test]
    fn test_git_wins_over_path() {
        let config = SourceConfig {
            git: Some("https://github.com/org/repo.git".to_string()),
            path: Some("./local".to_string()),
            ..SourceConfig::default()
        };
        let descriptor = SourceDescriptor::try_from(&config).unwrap();
        assert!(matches!(descriptor.kind, SourceKind::Git(_)));
    }

    #[test]
    fn test_path_config_converts() {
        let config = SourceConfig {
            path: Some("./sub/dep".to_string()),
            config_name: Some("custom.yaml".to_string()),
            ..SourceConfig::default()
        };
        let descriptor = SourceDescriptor::try_from(config).unwrap();
        assert_eq!(
            descriptor.kind,
            SourceKind::Path(PathSource::new("./sub/dep"))
        );
        assert_eq!(descriptor.config_name.as_deref(), Some("custom.yaml"));
    }
}
