//! Cache statistics and management
//!
//! This module provides functions for listing, removing, and
//! getting statistics about cache entries.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, cache};

use super::paths::cache_entry_path;

/// A single cache entry
#[derive(Debug, Clone)]
pub struct CacheEntryInfo {
    /// Directory name (encoded cache identity)
    pub name: String,
    /// Total size in bytes
    pub size: u64,
}

impl CacheEntryInfo {
    /// Format size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Cache statistics
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cache entries
    pub entries: usize,
    /// Total size in bytes
    pub total_size: u64,
}

impl CacheStats {
    /// Format total size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// List all cache entries, sorted by name
pub fn list_entries(cache_root: &Path) -> Result<Vec<CacheEntryInfo>> {
    if !cache_root.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(cache_root)
        .map_err(|e| cache::operation_failed(format!("Failed to read cache directory: {e}")))?
    {
        let entry =
            entry.map_err(|e| cache::operation_failed(format!("Failed to read entry: {e}")))?;

        if !entry.path().is_dir() {
            continue;
        }

        entries.push(CacheEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            size: dir_size(&entry.path())?,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Get cache statistics
pub fn cache_stats(cache_root: &Path) -> Result<CacheStats> {
    let entries = list_entries(cache_root)?;
    Ok(CacheStats {
        entries: entries.len(),
        total_size: entries.iter().map(|e| e.size).sum(),
    })
}

/// Remove the cache entry for a cache identity
pub fn remove_entry(cache_root: &Path, cache_id: &str) -> Result<()> {
    let path = cache_entry_path(cache_root, cache_id);

    if !path.exists() {
        return Err(cache::operation_failed(format!(
            "Dependency not found in cache: {cache_id}"
        )));
    }

    fs::remove_dir_all(&path)
        .map_err(|e| cache::operation_failed(format!("Failed to remove cache entry: {e}")))
}

/// Clear the entire dependency cache
pub fn clear_cache(cache_root: &Path) -> Result<()> {
    if cache_root.exists() {
        fs::remove_dir_all(cache_root)
            .map_err(|e| cache::operation_failed(format!("Failed to clear cache: {e}")))?;
    }
    Ok(())
}

/// Calculate directory size recursively
fn dir_size(path: &Path) -> Result<u64> {
    let mut size = 0u64;
    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file() {
            size += entry
                .metadata()
                .map_err(|e| cache::operation_failed(format!("Failed to get metadata: {e}")))?
                .len();
        }
    }
    Ok(size)
}
