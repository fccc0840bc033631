//! Completions command.

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::Write;

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Write the completion script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    let shell = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };
    generate(shell, &mut Cli::command(), "gsm", out);
}

/// Generate shell completions on stdout.
pub fn execute(shell: Shell) -> Result<()> {
    write(shell, &mut std::io::stdout());
    Ok(())
}
