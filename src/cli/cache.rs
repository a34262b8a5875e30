use clap::{Parser, Subcommand};

/// Arguments for cache command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show cache statistics:\n    depsrc cache\n\n\
                  List cache entries:\n    depsrc cache list\n\n\
                  Clear the whole cache:\n    depsrc cache clear\n\n\
                  Remove the entry of one source:\n    depsrc cache clear --only https://github.com/org/repo.git@main")]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: Option<CacheSubcommand>,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List cache entries
    List,

    /// Clear cache entries
    Clear(ClearCacheArgs),
}

/// Arguments for cache clear command
#[derive(Parser, Debug)]
pub struct ClearCacheArgs {
    /// Remove only the entry of this cache identity (see `depsrc id --cache`)
    #[arg(long, value_name = "CACHE_ID")]
    pub only: Option<String>,
}
