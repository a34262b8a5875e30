//! Local path resolution

use std::path::{Path, PathBuf};

use crate::error::{DepsrcError, Result};
use crate::path_utils;
use crate::source::PathSource;

/// Absolute path of a local source: as given when absolute, else relative to `base_path`
pub fn local_path(base_path: &Path, source: &PathSource) -> Result<PathBuf> {
    let path = Path::new(&source.path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    path_utils::absolutize(base_path, path).map_err(|e| DepsrcError::PathResolutionFailed {
        path: source.path.clone(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_relative_path() {
        let path = local_path(Path::new("/work"), &PathSource::new("./sub/dep")).unwrap();
        assert_eq!(path, PathBuf::from("/work/sub/dep"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_as_given() {
        let path = local_path(Path::new("/work"), &PathSource::new("/opt/dep")).unwrap();
        assert_eq!(path, PathBuf::from("/opt/dep"));
    }
}
