// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod commands;
pub mod completion;
pub mod error;

pub fn execute_command_with_services(
    cli: Cli,
    services: &ServiceContainer,
    settings: &Settings,
) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    match cli.command {
        Some(Commands::Convert { input, output }) => {
            commands::convert(input.as_deref(), &output, services, settings)
        }
        Some(Commands::Fetch {
            url,
            save_html,
            output,
        }) => commands::fetch(
            url.as_deref(),
            save_html.as_deref(),
            &output,
            services,
            settings,
        ),
        Some(Commands::Count { input }) => commands::count(input.as_deref(), services),
        Some(Commands::Completion { shell }) => handle_completion(shell),
        None => Ok(()),
    }
}

fn handle_completion(shell: String) -> CliResult<()> {
    match shell.to_lowercase().as_str() {
        "bash" => {
            eprintln!("# Outputting bash completion script for arcmark");
            eprintln!("# To use: eval \"$(arcmark completion bash)\"");
        }
        "zsh" => {
            eprintln!("# Outputting zsh completion script for arcmark");
            eprintln!("# To use: arcmark completion zsh > ~/.zfunc/_arcmark");
        }
        "fish" => {
            eprintln!("# Outputting fish completion script for arcmark");
            eprintln!("# To use: arcmark completion fish | source");
        }
        _ => {}
    }

    completion::generate_completion(&shell).map_err(|e| {
        CliError::CommandFailed(format!("Failed to generate completion script: {}", e))
    })
}
