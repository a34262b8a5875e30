//! Cache path utilities and constants
//!
//! This module computes the cache root and maps cache identities to
//! directories beneath it.

use std::path::{Path, PathBuf};

use crate::error::{Result, cache};
use crate::identity;
use crate::path_utils;

/// Environment variable overriding the cache root
pub const CACHE_ROOT_ENV: &str = "DEPSRC_CACHE_DIR";

/// Dependency folder relative to the user's home directory
pub const DEPENDENCY_FOLDER: &str = ".depsrc/dependencies";

/// Longest readable prefix kept in an entry name
const MAX_SLUG_LEN: usize = 48;

/// Hex digits of the identity digest kept in an entry name (128 bits)
const DIGEST_LEN: usize = 32;

/// Get the default cache root
///
/// Uses `~/.depsrc/dependencies`. Can be overridden with the `DEPSRC_CACHE_DIR`
/// environment variable.
pub fn default_cache_root() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CACHE_ROOT_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let home = dirs::home_dir()
        .ok_or_else(|| cache::operation_failed("Could not determine home directory"))?;

    Ok(home.join(Path::new(DEPENDENCY_FOLDER)))
}

/// Encode a cache identity into a filesystem-safe directory name.
///
/// Deterministic, and distinct identities always yield distinct names: the
/// slug keeps entries recognisable while the digest carries uniqueness.
/// Credentials are left out of the slug but still feed the digest.
pub fn encode_cache_id(cache_id: &str) -> String {
    let slug: String = path_utils::make_path_safe(&identity::strip_credentials(cache_id))
        .chars()
        .take(MAX_SLUG_LEN)
        .collect();
    let slug = slug.trim_end_matches(['-', '.']);
    let digest = blake3::hash(cache_id.as_bytes()).to_hex();

    format!("{slug}-{}", &digest.as_str()[..DIGEST_LEN])
}

/// Get the cache directory for a cache identity: `<cache_root>/<encoded id>`
pub fn cache_entry_path(cache_root: &Path, cache_id: &str) -> PathBuf {
    cache_root.join(encode_cache_id(cache_id))
}
