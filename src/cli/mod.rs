//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - source: Source selection flags shared by `resolve` and `id`
//! - resolve: Resolve command arguments
//! - id: Id command arguments
//! - cache: Cache command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cache;
pub mod completions;
pub mod id;
pub mod resolve;
pub mod source;

pub use cache::{CacheArgs, CacheSubcommand};
pub use completions::CompletionsArgs;
pub use id::IdArgs;
pub use resolve::ResolveArgs;
pub use source::SourceArgs;

/// depsrc - dependency source resolver
///
/// Resolve git repositories, remote URLs and local paths into configuration files.
#[derive(Parser, Debug)]
#[command(
    name = "depsrc",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve dependency sources into cached configuration files",
    long_about = "depsrc resolves a dependency source (git repository, remote URL or local path) \
                  to the configuration file it points at. Remote sources are cached and reused \
                  when a refresh fails.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  depsrc resolve --git https://github.com/org/repo.git --branch main\n   \
                  depsrc resolve --path https://example.com/depsrc.yaml\n   \
                  depsrc resolve --path ../shared --json\n   \
                  depsrc id --git https://github.com/org/repo.git --tag v1 --profile dev\n   \
                  depsrc cache list\n\n\
                  "
)]
pub struct Cli {
    /// Cache root directory (defaults to ~/.depsrc/dependencies)
    #[arg(long, global = true, env = "DEPSRC_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a dependency source to its configuration file
    Resolve(ResolveArgs),

    /// Print the identity of a dependency source
    Id(IdArgs),

    /// Manage the dependency cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
