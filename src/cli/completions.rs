use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    depsrc completions bash > ~/.bash_completion.d/depsrc\n\n\
                  Generate zsh completions:\n    depsrc completions zsh > ~/.zfunc/_depsrc\n\n\
                  Generate fish completions:\n    depsrc completions fish > ~/.config/fish/completions/depsrc.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
