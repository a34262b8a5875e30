//! Working tree updates for cached checkouts
//!
//! This module handles:
//! - Resetting a checkout to a fetched branch or tag
//! - Checking out a specific revision with a detached HEAD

use git2::build::CheckoutBuilder;
use git2::{Repository, ResetType};

use super::ORIGIN;
use super::error::git_error;
use crate::error::{Result, git};

/// Reference a refresh should end up on
pub fn target_ref(repo: &Repository, branch: Option<&str>, tag: Option<&str>) -> String {
    match (branch, tag) {
        (Some(branch), _) => format!("refs/remotes/{ORIGIN}/{branch}"),
        (None, Some(tag)) => format!("refs/tags/{tag}"),
        (None, None) => current_branch(repo)
            .map_or_else(|| "HEAD".to_string(), |name| format!("refs/remotes/{ORIGIN}/{name}")),
    }
}

/// Refspecs to fetch for a refresh; empty means the remote's configured ones
pub fn fetch_refspecs(branch: Option<&str>, tag: Option<&str>) -> Vec<String> {
    match (branch, tag) {
        (Some(branch), _) => vec![format!("+refs/heads/{branch}:refs/remotes/{ORIGIN}/{branch}")],
        (None, Some(tag)) => vec![format!("+refs/tags/{tag}:refs/tags/{tag}")],
        (None, None) => Vec::new(),
    }
}

/// Name of the branch HEAD points at, None when detached
fn current_branch(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?;
    if head.is_branch() {
        head.shorthand().map(ToString::to_string)
    } else {
        None
    }
}

/// Hard-reset the working tree (and current branch) to `refname`
pub fn reset_to(repo: &Repository, refname: &str) -> Result<()> {
    let object = repo
        .revparse_single(refname)
        .and_then(|object| object.peel(git2::ObjectType::Commit))
        .map_err(|e| git_error(&e))?;

    let mut checkout = CheckoutBuilder::new();
    checkout.force();
    repo.reset(&object, ResetType::Hard, Some(&mut checkout))
        .map_err(|e| git_error(&e))
}

/// Check out a revision (SHA or any revparse spec) with a detached HEAD
pub fn checkout_revision(repo: &Repository, revision: &str) -> Result<()> {
    let commit = repo
        .revparse_single(revision)
        .and_then(|object| object.peel_to_commit())
        .map_err(|e| git::operation_failed(format!("Revision '{revision}' not found: {}", e.message())))?;

    repo.set_head_detached(commit.id()).map_err(|e| git_error(&e))?;

    let mut checkout = CheckoutBuilder::new();
    checkout.force();
    repo.checkout_head(Some(&mut checkout))
        .map_err(|e| git_error(&e))
}
