//! Dependency cache for depsrc
//!
//! Remote sources (git repositories and downloaded files) are kept on disk so
//! repeated resolutions reuse them and a failed refresh can fall back to them.
//!
//! ## Cache Structure
//!
//! ```text
//! ~/.depsrc/dependencies/
//! ├── <encoded git cache id>/        # git checkout
//! │   └── depsrc.yaml
//! └── <encoded url cache id>/        # downloaded file
//!     └── depsrc.yaml
//! ```
//!
//! An entry name is `encode_cache_id(cache_id)`: a readable slug of the cache
//! identity followed by a BLAKE3 digest of it, so two identities never share a
//! directory. Entries are created on first successful fetch, refreshed in
//! place and left untouched when a refresh fails.

pub mod paths;
pub mod stats;

pub use paths::{CACHE_ROOT_ENV, cache_entry_path, default_cache_root, encode_cache_id};
pub use stats::{CacheEntryInfo, CacheStats, cache_stats, clear_cache, list_entries, remove_entry};
