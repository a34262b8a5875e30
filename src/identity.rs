//! Dependency identities
//!
//! Two identities are derived from a source, for different purposes:
//!
//! - The **cache identity** selects a cache directory. It is never shown and
//!   may contain credentials. Ref precedence: branch, then tag, then revision.
//! - The **diagnostic identity** deduplicates logically equivalent dependency
//!   invocations and appears in logs. Credentials are stripped and profile and
//!   variables are folded in. Ref precedence: tag, then branch, then revision.
//!
//! The two precedence orders differ on purpose; dependency deduplication relies
//! on the diagnostic form as it is. Bare URL path sources keep their credentials
//! in the diagnostic identity for the same reason.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::git::VcsClient;
use crate::path_utils;
use crate::source::{DependencyVar, GitSource, SourceConfig, SourceDescriptor, SourceKind};

/// Matches `http(s)://user:pass@rest`
static BASIC_AUTH: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(https?://)[^:]+:[^@]+@(.*)$").expect("basic auth pattern is valid")
});

/// Cache identity of a source
pub fn cache_id(source: &SourceDescriptor) -> String {
    match &source.kind {
        SourceKind::Git(git) => git_cache_id(git),
        SourceKind::Path(path) => path.path.clone(),
    }
}

fn git_cache_id(git: &GitSource) -> String {
    let mut id = git.url.clone();
    if let Some(branch) = &git.branch {
        let _ = write!(id, "@{branch}");
    } else if let Some(tag) = &git.tag {
        let _ = write!(id, "@tag:{tag}");
    } else if let Some(revision) = &git.revision {
        let _ = write!(id, "@revision:{revision}");
    }
    id
}

/// Remove `user:pass@` from an http(s) URL
pub fn strip_credentials(url: &str) -> String {
    BASIC_AUTH.replace(url, "$1$2").into_owned()
}

/// Diagnostic identity of a source
///
/// `base_path` resolves relative local paths. `vcs` is asked for the `origin`
/// remote of local paths; when one exists it stands in for the path.
pub fn diagnostic_id(
    base_path: &Path,
    source: &SourceDescriptor,
    profile: Option<&str>,
    vars: &[DependencyVar],
    vcs: &dyn VcsClient,
) -> String {
    match &source.kind {
        SourceKind::Git(git) => {
            let mut id = strip_credentials(git.url.trim());
            if let Some(reference) = git
                .tag
                .as_ref()
                .or(git.branch.as_ref())
                .or(git.revision.as_ref())
            {
                let _ = write!(id, "@{reference}");
            }
            if let Some(sub_path) = &source.sub_path {
                let _ = write!(id, ":{sub_path}");
            }
            append_profile(&mut id, profile);
            if !git.clone_args.is_empty() {
                let _ = write!(id, " - with clone args {}", git.clone_args.join(" "));
            }
            append_vars(&mut id, vars);
            id
        }
        SourceKind::Path(path) if path.is_url() => {
            let mut id = path.path.trim().to_string();
            append_profile(&mut id, profile);
            append_vars(&mut id, vars);
            id
        }
        SourceKind::Path(path) => {
            let local = path_utils::absolutize(base_path, Path::new(&path.path))
                .unwrap_or_else(|_| base_path.join(&path.path));

            let mut id = match vcs.remote_url(&local) {
                Ok(remote) => remote,
                Err(_) => match &source.config_name {
                    Some(config_name) => local.join(config_name).display().to_string(),
                    None => local.display().to_string(),
                },
            };
            append_profile(&mut id, profile);
            append_vars(&mut id, vars);
            id
        }
    }
}

/// Diagnostic identity of a raw source configuration; empty when the
/// configuration names no source at all
pub fn diagnostic_id_for_config(
    base_path: &Path,
    config: &SourceConfig,
    profile: Option<&str>,
    vars: &[DependencyVar],
    vcs: &dyn VcsClient,
) -> String {
    SourceDescriptor::try_from(config)
        .map(|source| diagnostic_id(base_path, &source, profile, vars, vcs))
        .unwrap_or_default()
}

fn append_profile(id: &mut String, profile: Option<&str>) {
    if let Some(profile) = profile.filter(|p| !p.is_empty()) {
        let _ = write!(id, " - profile {profile}");
    }
}

fn append_vars(id: &mut String, vars: &[DependencyVar]) {
    for var in vars {
        let _ = write!(id, ";{}={}", var.name, var.value);
    }
}
