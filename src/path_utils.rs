//! Cross-platform path utilities for depsrc
//!
//! Lexical path handling only: nothing here touches the filesystem beyond
//! reading the current directory, so paths that do not exist yet resolve
//! the same way as paths that do.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Characters that are unsafe in filesystem paths
/// Replaced with hyphens and collapsed: `/`, `\`, `:`, `*`, `?`, `"`, `<`, `>`, `|`, `@`, `;`
const PATH_UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '@', ';'];

/// Make an arbitrary identity string safe for use as a single path segment.
///
/// Replaces unsafe characters and whitespace with hyphens, collapses consecutive
/// hyphens and removes leading/trailing hyphens. Returns "unknown" if the result is empty.
///
/// This is not injective on its own; callers that need uniqueness append a hash.
///
/// # Examples
///
/// ```
/// use depsrc::path_utils::make_path_safe;
///
/// assert_eq!(make_path_safe("https://github.com/org/repo.git@main"), "https-github.com-org-repo.git-main");
/// assert_eq!(make_path_safe(":::"), "unknown");
/// ```
pub fn make_path_safe(name: &str) -> String {
    let key: String = name
        .chars()
        .map(|c| {
            if PATH_UNSAFE_CHARS.contains(&c) || c.is_whitespace() || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();

    let key = key
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if key.is_empty() {
        "unknown".to_string()
    } else {
        key
    }
}

/// Resolve `path` against `base` and return a clean absolute path.
///
/// Absolute `path`s are returned cleaned but otherwise as given. Relative
/// ones are joined onto `base`; a relative `base` is itself resolved against the
/// current directory. `.` components are dropped and `..` pops a component.
pub fn absolutize(base: &Path, path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else if base.is_absolute() {
        base.join(path)
    } else {
        std::env::current_dir()?.join(base).join(path)
    };
    Ok(clean(&joined))
}

/// Lexically normalize a path (like Go's `filepath.Clean`).
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
