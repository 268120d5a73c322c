// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Convert Arc browser sharing pages into importable bookmark files
pub struct Cli {
    /// Sets a custom config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[arg(long = "generate-config", help = "print default configuration and exit")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the generated bookmark file goes
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "bookmark file to write")]
    pub output: Option<String>,

    #[arg(long = "stdout", help = "print the bookmark file to stdout instead", conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a saved Arc sharing page (file or stdin) into a bookmark file
    Convert {
        /// HTML file of the sharing page, `-` or nothing for stdin
        input: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Fetch an Arc sharing page and convert it
    Fetch {
        /// https://arc.net/... share link; read from the clipboard when omitted
        url: Option<String>,

        #[arg(long = "save-html", value_name = "FILE", help = "also store the fetched page")]
        save_html: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the number of saved links in a sharing page
    Count {
        /// HTML file of the sharing page, `-` or nothing for stdin
        input: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for (bash, zsh, fish)
        shell: String,
    },
}
