//! Git operations for dependency sources
//!
//! The resolver only needs two things from version control, captured by
//! [`VcsClient`]:
//! - bring a checkout at a target directory up to date with a remote ref
//! - read the `origin` URL of a local checkout
//!
//! [`Git2Client`] implements both on top of libgit2. Authentication is
//! delegated to git's native system:
//! - SSH agent and keys from ~/.ssh/
//! - Git credential helpers
//! - Credentials embedded in the URL

mod auth;
mod checkout;
mod client;
mod error;
mod url;

use std::path::Path;

use crate::error::Result;
use crate::source::GitSource;

pub use client::Git2Client;

/// Remote name used for cloned dependencies
pub const ORIGIN: &str = "origin";

/// What to clone and which ref to end up on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneOptions {
    pub url: String,
    pub branch: Option<String>,
    pub tag: Option<String>,
    /// Commit to check out after cloning or fetching
    pub revision: Option<String>,
    pub extra_args: Vec<String>,
    pub disable_shallow: bool,
}

impl From<&GitSource> for CloneOptions {
    fn from(source: &GitSource) -> Self {
        Self {
            url: source.clone_url().to_string(),
            branch: source.branch.clone(),
            tag: source.tag.clone(),
            revision: source.revision.clone(),
            extra_args: source.clone_args.clone(),
            disable_shallow: source.disable_shallow,
        }
    }
}

/// Version control capability used by the resolver
pub trait VcsClient {
    /// Clone `options.url` into `target`, or refresh `target` if it already
    /// holds a checkout, leaving the working tree at the requested ref.
    fn sync(&self, target: &Path, options: &CloneOptions) -> Result<()>;

    /// URL of the `origin` remote of the checkout at `path`.
    fn remote_url(&self, path: &Path) -> Result<String>;
}
