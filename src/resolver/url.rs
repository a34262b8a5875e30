//! Remote file resolution

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{FetchOutcome, Resolution, SourceResolver};
use crate::cache::cache_entry_path;
use crate::error::{DepsrcError, Result, cache};
use crate::identity::strip_credentials;
use crate::source::PathSource;

impl SourceResolver {
    /// Download a remote configuration file into the cache
    ///
    /// The file is always stored under the default config file name, since
    /// the cache entry is keyed by URL alone. Config name overrides and sub
    /// paths do not apply to downloaded files.
    pub(super) fn download(&self, path: &PathSource, cache_id: &str) -> Result<Resolution> {
        let local_path = cache_entry_path(&self.options.cache_root, cache_id);
        let config_path = local_path.join(&self.options.default_config_file);
        let url = path.path.trim();
        let display_url = strip_credentials(url);
        let existed = config_path.exists();

        let outcome = if path.disable_pull && existed {
            debug!(url = %display_url, path = %config_path.display(), "using cached file");
            FetchOutcome::Cached
        } else {
            match self.download_to(url, &config_path) {
                Ok(()) => {
                    debug!(url = %display_url, path = %config_path.display(), "downloaded file");
                    FetchOutcome::Fetched
                }
                Err(err) if existed => FetchOutcome::Stale {
                    warning: format!("Error retrieving url {display_url}: {err}"),
                },
                Err(err) => {
                    // Only removes the directory if the failed download left it empty
                    let _ = fs::remove_dir(&local_path);
                    return Err(DepsrcError::DownloadFailed {
                        url: display_url,
                        source: Box::new(err),
                    });
                }
            }
        };

        Ok(Resolution {
            config_path,
            dependency_dir: local_path,
            outcome,
        })
    }

    /// Stream `url` into `target`, replacing it only once the body is complete
    fn download_to(&self, url: &str, target: &Path) -> Result<()> {
        let dir = target
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        fs::create_dir_all(&dir).map_err(|e| {
            cache::operation_failed(format!(
                "Failed to create cache directory {}: {e}",
                dir.display()
            ))
        })?;

        let mut body = self.fetcher.fetch(url)?;
        let mut temp = NamedTempFile::new_in(&dir)?;
        io::copy(&mut body, &mut temp)?;
        temp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}
