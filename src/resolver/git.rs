//! Git source resolution

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{FetchOutcome, SourceResolver};
use crate::cache::cache_entry_path;
use crate::error::{DepsrcError, Result, cache};
use crate::git::CloneOptions;
use crate::identity::strip_credentials;
use crate::source::GitSource;

impl SourceResolver {
    /// Bring the cached checkout for `git` up to date and return its directory
    pub(super) fn sync_git(
        &self,
        git: &GitSource,
        cache_id: &str,
    ) -> Result<(PathBuf, FetchOutcome)> {
        let cache_root = &self.options.cache_root;
        fs::create_dir_all(cache_root).map_err(|e| {
            cache::operation_failed(format!(
                "Failed to create cache directory {}: {e}",
                cache_root.display()
            ))
        })?;

        let local_path = cache_entry_path(cache_root, cache_id);
        let display_url = strip_credentials(git.clone_url());
        let existed = local_path.exists();

        if git.disable_pull && existed {
            debug!(url = %display_url, path = %local_path.display(), "using cached repository");
            return Ok((local_path, FetchOutcome::Cached));
        }

        match self.vcs.sync(&local_path, &CloneOptions::from(git)) {
            Ok(()) => {
                debug!(url = %display_url, path = %local_path.display(), "synced repository");
                Ok((local_path, FetchOutcome::Fetched))
            }
            Err(err) if existed => {
                let warning =
                    format!("Error cloning or pulling git repository {display_url}: {err}");
                Ok((local_path, FetchOutcome::Stale { warning }))
            }
            Err(err) => {
                discard_partial_entry(&local_path);
                Err(DepsrcError::CloneFailed {
                    url: display_url,
                    source: Box::new(err),
                })
            }
        }
    }
}

/// Remove whatever a failed first clone left behind, so the next run clones
/// again instead of treating a checkout on the wrong ref as a stale entry
fn discard_partial_entry(local_path: &Path) {
    if !local_path.exists() {
        return;
    }
    if let Err(e) = fs::remove_dir_all(local_path) {
        debug!(path = %local_path.display(), error = %e, "failed to remove partial clone");
    }
}
