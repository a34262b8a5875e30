use clap::Parser;

use super::SourceArgs;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve a branch of a git repository:\n    depsrc resolve --git https://github.com/org/repo.git --branch main\n\n\
                  Resolve a sub directory of a tagged release:\n    depsrc resolve --git git@github.com:org/repo.git --tag v1.2.0 --sub-path charts\n\n\
                  Download a remote configuration file:\n    depsrc resolve --path https://example.com/depsrc.yaml\n\n\
                  Resolve a source described in a YAML file:\n    depsrc resolve --from source.yaml --json")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the full resolution as JSON
    #[arg(long)]
    pub json: bool,
}
