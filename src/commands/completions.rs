//! Shell completions command

use clap::CommandFactory;

use depsrc::error::Result;

use crate::cli::{Cli, CompletionsArgs};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "depsrc", &mut std::io::stdout().lock());
    Ok(())
}
