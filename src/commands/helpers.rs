//! Command helper utilities

use std::path::PathBuf;

use depsrc::error::Result;
use depsrc::resolver::ResolverOptions;

/// Resolver options from the `--cache-dir` flag, else from the environment
pub fn resolver_options(cache_dir: Option<PathBuf>) -> Result<ResolverOptions> {
    match cache_dir {
        Some(dir) => Ok(ResolverOptions::new(dir)),
        None => ResolverOptions::from_env(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_cache_dir() {
        let options = resolver_options(Some(PathBuf::from("/tmp/cache"))).unwrap();
        assert_eq!(options.cache_root, PathBuf::from("/tmp/cache"));
        assert_eq!(options.default_config_file, "depsrc.yaml");
    }
}
