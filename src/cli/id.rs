use clap::Parser;

use depsrc::source::DependencyVar;

use super::SourceArgs;

/// Arguments for the id command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the identity of a git dependency:\n    depsrc id --git https://github.com/org/repo.git --tag v1\n\n\
                  Include profile and variables:\n    depsrc id --path ../shared --profile dev --var ENV=staging\n\n\
                  Show the cache identity and directory too:\n    depsrc id --git https://github.com/org/repo.git --cache")]
pub struct IdArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Profile the dependency is invoked with
    #[arg(long)]
    pub profile: Option<String>,

    /// Variable passed to the dependency (NAME=VALUE, repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<DependencyVar>,

    /// Also print the cache identity and cache directory
    #[arg(long)]
    pub cache: bool,
}
