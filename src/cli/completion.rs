// src/cli/completion.rs
use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};
use tracing::{debug, instrument};

const SUPPORTED: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn parse_shell(name: &str) -> io::Result<Shell> {
    SUPPORTED
        .into_iter()
        .find(|shell| shell.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unsupported shell: {}. Supported shells: bash, zsh, fish", name),
            )
        })
}

/// Writes the completion script for `shell` into `out`.
///
/// ```bash
/// eval "$(arcmark completion bash)"
/// arcmark completion fish > ~/.config/fish/completions/arcmark.fish
/// ```
#[instrument(level = "debug", skip(out))]
pub fn write_completion<W: Write>(shell: &str, out: &mut W) -> io::Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    debug!("Generating {} completion", shell);
    generate(shell, &mut cmd, bin_name, out);
    Ok(())
}

/// Prints the completion script to stdout
pub fn generate_completion(shell: &str) -> io::Result<()> {
    write_completion(shell, &mut io::stdout())
}
