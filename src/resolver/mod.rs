//! Dependency source resolution
//!
//! This module turns a [`SourceDescriptor`] into the path of a configuration
//! file on local disk:
//! - Git sources are cloned or pulled into the cache
//! - URL sources are downloaded into the cache
//! - Local paths are resolved against the caller's base path
//!
//! Refreshing a cached source may fail (offline, remote gone, auth expired).
//! When a previous copy is on disk the resolver uses it and reports
//! [`FetchOutcome::Stale`] instead of failing; only a source that has never
//! been fetched produces a hard error. No retries are attempted here.

mod git;
mod local;
pub mod locate;
mod options;
mod url;


use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cache;
use crate::error::Result;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::git::{Git2Client, VcsClient};
use crate::identity;
use crate::source::{DependencyVar, SourceConfig, SourceDescriptor, SourceKind};

pub use locate::{CONFIG_EXTENSIONS, ConfigLocation, locate};
pub use options::{DEFAULT_CONFIG_FILE, ResolverOptions};

/// How the resolved source was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchOutcome {
    /// Cloned, pulled or downloaded just now
    Fetched,
    /// Existing cache entry reused without refreshing
    Cached,
    /// Local path, nothing to fetch
    Local,
    /// Refresh failed; the existing cache entry was used instead
    Stale { warning: String },
}

/// Result of resolving a dependency source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Configuration file to load (may not exist; opening it is the caller's concern)
    pub config_path: PathBuf,
    /// Directory the dependency lives in
    pub dependency_dir: PathBuf,
    pub outcome: FetchOutcome,
}

impl Resolution {
    /// Warning to surface when a stale cache entry was used
    pub fn warning(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Stale { warning } => Some(warning),
            _ => None,
        }
    }
}

/// Resolves dependency sources to local configuration files
pub struct SourceResolver {
    options: ResolverOptions,
    vcs: Box<dyn VcsClient>,
    fetcher: Box<dyn Fetcher>,
}

impl SourceResolver {
    /// Create a resolver using libgit2 and HTTP
    pub fn new(options: ResolverOptions) -> Result<Self> {
        Ok(Self::with_backends(
            options,
            Box::new(Git2Client::new()),
            Box::new(HttpFetcher::new()?),
        ))
    }

    /// Create a resolver with explicit version control and transport backends
    pub fn with_backends(
        options: ResolverOptions,
        vcs: Box<dyn VcsClient>,
        fetcher: Box<dyn Fetcher>,
    ) -> Self {
        Self {
            options,
            vcs,
            fetcher,
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Cache directory a source maps to; None for local paths
    pub fn cache_path(&self, source: &SourceDescriptor) -> Option<PathBuf> {
        match &source.kind {
            SourceKind::Path(path) if !path.is_url() => None,
            _ => Some(cache::cache_entry_path(
                &self.options.cache_root,
                &identity::cache_id(source),
            )),
        }
    }

    /// Diagnostic identity of a source, using this resolver's VCS backend
    /// for remote lookups of local checkouts
    pub fn diagnostic_id(
        &self,
        base_path: &Path,
        source: &SourceDescriptor,
        profile: Option<&str>,
        vars: &[DependencyVar],
    ) -> String {
        identity::diagnostic_id(base_path, source, profile, vars, self.vcs.as_ref())
    }

    /// Diagnostic identity of a raw source configuration; empty when the
    /// configuration does not describe a valid source
    pub fn diagnostic_id_for_config(
        &self,
        base_path: &Path,
        config: &SourceConfig,
        profile: Option<&str>,
        vars: &[DependencyVar],
    ) -> String {
        identity::diagnostic_id_for_config(base_path, config, profile, vars, self.vcs.as_ref())
    }

    /// Validate a raw source configuration and resolve it
    pub fn resolve_config(&self, base_path: &Path, config: &SourceConfig) -> Result<Resolution> {
        let source = SourceDescriptor::try_from(config)?;
        self.resolve(base_path, &source)
    }

    /// Resolve a source to its configuration file
    ///
    /// `base_path` is the directory relative local paths are resolved against.
    pub fn resolve(&self, base_path: &Path, source: &SourceDescriptor) -> Result<Resolution> {
        let cache_id = identity::cache_id(source);

        let (dependency_path, outcome) = match &source.kind {
            SourceKind::Git(git) => self.sync_git(git, &cache_id)?,
            SourceKind::Path(path) if path.is_url() => {
                return self.download(path, &cache_id);
            }
            SourceKind::Path(path) => (local::local_path(base_path, path)?, FetchOutcome::Local),
        };

        let dependency_path = match &source.sub_path {
            Some(sub_path) => dependency_path.join(sub_path),
            None => dependency_path,
        };

        let location = locate(
            dependency_path,
            source.config_name.as_deref(),
            &self.options.default_config_file,
        );

        Ok(Resolution {
            config_path: location.config_path,
            dependency_dir: location.dependency_dir,
            outcome,
        })
    }
}
