//! URL normalization for libgit2
//!
//! libgit2 is picky about two URL shapes that git itself accepts:
//! - SCP-style SSH (`git@host:path`) is rewritten to `ssh://git@host/path`
//! - `file://` URLs with relative or backslash paths are rewritten to `file:///path`

use std::borrow::Cow;
use std::path::Path;

/// Normalize a clone URL for libgit2
pub fn normalize_clone_url(url: &str) -> Cow<'_, str> {
    if let Some(rest) = url.strip_prefix("git@") {
        return match rest.split_once(':') {
            Some((host, path)) => {
                let path = path.trim_start_matches('/');
                Cow::Owned(format!("ssh://git@{host}/{path}"))
            }
            None => Cow::Borrowed(url),
        };
    }

    if let Some(after) = url.strip_prefix("file://") {
        let path = after.replace('\\', "/");
        if !path.starts_with('/') || path != after {
            return Cow::Owned(format!("file:///{}", path.trim_start_matches('/')));
        }
    }

    Cow::Borrowed(url)
}

/// Whether the URL points at the local filesystem (no shallow support there)
pub fn is_local(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || Path::new(url).is_absolute()
}
