use std::path::{Path, PathBuf};

use clap::Args;

use depsrc::error::{DepsrcError, Result};
use depsrc::source::SourceConfig;

/// Flags describing a dependency source
///
/// Flags override the matching fields of a `--from` file.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Git repository URL
    #[arg(long, help_heading = "Source")]
    pub git: Option<String>,

    /// Branch to check out
    #[arg(long, help_heading = "Source")]
    pub branch: Option<String>,

    /// Tag to check out
    #[arg(long, help_heading = "Source")]
    pub tag: Option<String>,

    /// Commit to check out
    #[arg(long, help_heading = "Source")]
    pub revision: Option<String>,

    /// Extra clone argument (repeatable)
    #[arg(long = "clone-arg", value_name = "ARG", allow_hyphen_values = true, help_heading = "Source")]
    pub clone_args: Vec<String>,

    /// Fetch the full history instead of a shallow clone
    #[arg(long, help_heading = "Source")]
    pub disable_shallow: bool,

    /// Remote URL or local path
    #[arg(long, help_heading = "Source")]
    pub path: Option<String>,

    /// Directory or file inside the source
    #[arg(long, help_heading = "Source")]
    pub sub_path: Option<String>,

    /// Configuration file name to load
    #[arg(long, help_heading = "Source")]
    pub config_name: Option<String>,

    /// Reuse a cached copy without refreshing it
    #[arg(long, help_heading = "Source")]
    pub disable_pull: bool,

    /// Read the source from a YAML file
    #[arg(long, value_name = "FILE", help_heading = "Source")]
    pub from: Option<PathBuf>,

    /// Directory relative local paths are resolved against
    /// (defaults to the directory of --from, else the current directory)
    #[arg(long, value_name = "DIR", help_heading = "Source")]
    pub base_path: Option<PathBuf>,
}

impl SourceArgs {
    /// Build the source configuration from `--from` and the flags
    pub fn to_config(&self) -> Result<SourceConfig> {
        let mut config = match &self.from {
            Some(file) => SourceConfig::from_file(file)?,
            None => SourceConfig::default(),
        };

        overlay(&mut config.git, &self.git);
        overlay(&mut config.branch, &self.branch);
        overlay(&mut config.tag, &self.tag);
        overlay(&mut config.revision, &self.revision);
        overlay(&mut config.path, &self.path);
        overlay(&mut config.sub_path, &self.sub_path);
        overlay(&mut config.config_name, &self.config_name);
        if !self.clone_args.is_empty() {
            config.clone_args.clone_from(&self.clone_args);
        }
        config.disable_shallow |= self.disable_shallow;
        config.disable_pull |= self.disable_pull;

        Ok(config)
    }

    /// Directory relative local paths are resolved against
    pub fn base_path(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_path {
            return Ok(base.clone());
        }
        if let Some(parent) = self.from.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() {
                return Ok(parent.to_path_buf());
            }
        }
        std::env::current_dir().map_err(|e| DepsrcError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })
    }
}

fn overlay(field: &mut Option<String>, flag: &Option<String>) {
    if flag.is_some() {
        field.clone_from(flag);
    }
}
