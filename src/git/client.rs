//! libgit2-backed version control client

use std::path::Path;

use git2::build::RepoBuilder;
use git2::{AutotagOption, FetchOptions, RemoteCallbacks, Repository};
use tracing::debug;

use super::auth::setup_auth_callbacks;
use super::checkout::{checkout_revision, fetch_refspecs, reset_to, target_ref};
use super::error::git_error;
use super::url::{is_local, normalize_clone_url};
use super::{CloneOptions, ORIGIN, VcsClient};
use crate::error::{DepsrcError, Result, git};

/// Version control client using libgit2
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Client;

impl Git2Client {
    pub fn new() -> Self {
        Self
    }

    /// Shallow fetches are used unless disabled, a revision must be reachable,
    /// a tag must be found or the remote is local (unsupported by libgit2).
    fn shallow(options: &CloneOptions) -> bool {
        !options.disable_shallow
            && options.revision.is_none()
            && (options.tag.is_none() || options.branch.is_some())
            && !is_local(&options.url)
    }

    fn fetch_options(options: &CloneOptions) -> FetchOptions<'static> {
        let mut callbacks = RemoteCallbacks::new();
        setup_auth_callbacks(&mut callbacks);

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        if Self::shallow(options) {
            fetch_options.depth(1);
        }
        if options.tag.is_some() {
            fetch_options.download_tags(AutotagOption::All);
        }
        fetch_options
    }

    fn clone_fresh(target: &Path, options: &CloneOptions) -> Result<()> {
        let mut builder = RepoBuilder::new();
        builder.fetch_options(Self::fetch_options(options));
        if let Some(branch) = &options.branch {
            builder.branch(branch);
        }

        let url = normalize_clone_url(&options.url);
        let repo = builder
            .clone(url.as_ref(), target)
            .map_err(|e| git_error(&e))?;

        if options.branch.is_none() {
            if let Some(tag) = &options.tag {
                reset_to(&repo, &format!("refs/tags/{tag}"))?;
            }
        }
        if let Some(revision) = &options.revision {
            checkout_revision(&repo, revision)?;
        }

        debug!(url = %options.url, target = %target.display(), "cloned repository");
        Ok(())
    }

    fn refresh(target: &Path, options: &CloneOptions) -> Result<()> {
        let repo = Repository::open(target)
            .map_err(|e| git::open_failed(target.display().to_string(), e.message()))?;
        let branch = options.branch.as_deref();
        let tag = if branch.is_none() {
            options.tag.as_deref()
        } else {
            None
        };

        {
            let mut remote = repo.find_remote(ORIGIN).map_err(|_| DepsrcError::RemoteNotFound {
                path: target.display().to_string(),
                remote: ORIGIN.to_string(),
            })?;
            let refspecs = fetch_refspecs(branch, tag);
            remote
                .fetch(&refspecs, Some(&mut Self::fetch_options(options)), None)
                .map_err(|e| git_error(&e))?;
        }

        match &options.revision {
            Some(revision) => checkout_revision(&repo, revision)?,
            None => reset_to(&repo, &target_ref(&repo, branch, tag))?,
        }

        debug!(url = %options.url, target = %target.display(), "pulled repository");
        Ok(())
    }
}

impl VcsClient for Git2Client {
    fn sync(&self, target: &Path, options: &CloneOptions) -> Result<()> {
        if !options.extra_args.is_empty() {
            debug!(
                args = ?options.extra_args,
                "extra clone arguments are not supported by the libgit2 backend"
            );
        }

        if target.join(".git").exists() {
            Self::refresh(target, options)
        } else {
            Self::clone_fresh(target, options)
        }
    }

    fn remote_url(&self, path: &Path) -> Result<String> {
        let repo = Repository::open(path)
            .map_err(|e| git::open_failed(path.display().to_string(), e.message()))?;
        let remote = repo.find_remote(ORIGIN).map_err(|_| DepsrcError::RemoteNotFound {
            path: path.display().to_string(),
            remote: ORIGIN.to_string(),
        })?;

        remote
            .url()
            .map(ToString::to_string)
            .ok_or_else(|| DepsrcError::RemoteNotFound {
                path: path.display().to_string(),
                remote: ORIGIN.to_string(),
            })
    }
}
