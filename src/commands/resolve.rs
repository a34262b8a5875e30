//! Resolve command implementation
//!
//! Resolves a dependency source and prints the configuration file to load.

use std::path::PathBuf;

use tracing::warn;

use depsrc::error::{DepsrcError, Result};
use depsrc::resolver::{Resolution, SourceResolver};

use super::helpers::resolver_options;
use crate::cli::ResolveArgs;

/// Run resolve command
pub fn run(cache_dir: Option<PathBuf>, args: ResolveArgs) -> Result<()> {
    let resolver = SourceResolver::new(resolver_options(cache_dir)?)?;
    let config = args.source.to_config()?;
    let base_path = args.source.base_path()?;

    let resolution = resolver.resolve_config(&base_path, &config)?;
    if let Some(warning) = resolution.warning() {
        warn!("{warning}");
    }

    println!("{}", render(&resolution, args.json)?);
    Ok(())
}

fn render(resolution: &Resolution, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(resolution).map_err(|e| DepsrcError::IoError {
            message: format!("Failed to serialize resolution: {e}"),
        })
    } else {
        Ok(resolution.config_path.display().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use depsrc::resolver::FetchOutcome;

    fn resolution() -> Resolution {
        Resolution {
            config_path: PathBuf::from("/deps/app/depsrc.yaml"),
            dependency_dir: PathBuf::from("/deps/app"),
            outcome: FetchOutcome::Local,
        }
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render(&resolution(), false).unwrap(), "/deps/app/depsrc.yaml");
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&resolution(), true).unwrap()).unwrap();
        assert_eq!(json["configPath"], "/deps/app/depsrc.yaml");
        assert_eq!(json["dependencyDir"], "/deps/app");
        assert_eq!(json["outcome"]["status"], "local");
    }
}
