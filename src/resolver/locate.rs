//! Configuration file location
//!
//! Given the directory (or file) a source resolved to, decide which file to load.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extensions that mark a path as a configuration file itself
pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Where a dependency's configuration lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub config_path: PathBuf,
    /// Directory containing the dependency
    pub dependency_dir: PathBuf,
}

/// Locate the configuration file for `dependency_path`
///
/// - An explicit `config_name` is joined onto the path.
/// - A path that already ends in a configuration extension is the file itself,
///   and its parent is the dependency directory.
/// - Otherwise `default_config_file` is joined onto the path.
///
/// Existence is not checked.
pub fn locate(
    dependency_path: PathBuf,
    config_name: Option<&str>,
    default_config_file: &str,
) -> ConfigLocation {
    if let Some(config_name) = config_name {
        return ConfigLocation {
            config_path: dependency_path.join(config_name),
            dependency_dir: dependency_path,
        };
    }

    if has_config_extension(&dependency_path) {
        let dependency_dir = dependency_path
            .parent()
            .map_or_else(|| dependency_path.clone(), Path::to_path_buf);
        return ConfigLocation {
            config_path: dependency_path,
            dependency_dir,
        };
    }

    ConfigLocation {
        config_path: dependency_path.join(default_config_file),
        dependency_dir: dependency_path,
    }
}

fn has_config_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file() {
        let location = locate(PathBuf::from("/deps/repo"), None, "depsrc.yaml");
        assert_eq!(location.config_path, PathBuf::from("/deps/repo/depsrc.yaml"));
        assert_eq!(location.dependency_dir, PathBuf::from("/deps/repo"));
    }

    #[test]
    fn test_yaml_path_is_config() {
        let location = locate(PathBuf::from("/deps/repo/app.yaml"), None, "depsrc.yaml");
        assert_eq!(location.config_path, PathBuf::from("/deps/repo/app.yaml"));
        assert_eq!(location.dependency_dir, PathBuf::from("/deps/repo"));
    }

    #[test]
    fn test_yml_path_is_config() {
        let location = locate(PathBuf::from("/deps/repo/app.yml"), None, "depsrc.yaml");
        assert_eq!(location.config_path, PathBuf::from("/deps/repo/app.yml"));
        assert_eq!(location.dependency_dir, PathBuf::from("/deps/repo"));
    }

    #[test]
    fn test_override_wins_regardless_of_extension() {
        let location = locate(
            PathBuf::from("/deps/repo/app.yaml"),
            Some("custom.yaml"),
            "depsrc.yaml",
        );
        assert_eq!(
            location.config_path,
            PathBuf::from("/deps/repo/app.yaml/custom.yaml")
        );
        assert_eq!(location.dependency_dir, PathBuf::from("/deps/repo/app.yaml"));
    }

    #[test]
    fn test_other_extension_is_directory() {
        let location = locate(PathBuf::from("/deps/repo.v2"), None, "depsrc.yaml");
        assert_eq!(location.config_path, PathBuf::from("/deps/repo.v2/depsrc.yaml"));
    }
}
