//! tagged CLI - markup tree builder.
//!
//! Provides commands for:
//! - `el`: Build a single element from a compact name
//! - `list`: Render a ul, ol, dl or inline list
//! - `preview`: Print a plain-text or abbreviated preview of markup

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ElArgs, ListArgs, PreviewArgs};
use output::Output;

/// tagged - Markup tree builder.
#[derive(Parser)]
#[command(name = "tagged", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an element and print its markup.
    El(ElArgs),
    /// Render a list of items.
    List(ListArgs),
    /// Print a preview of markup from a file or stdin.
    Preview(PreviewArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::El(args) => args.common.verbose,
            Self::List(args) => args.common.verbose,
            Self::Preview(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::El(args) => args.execute(),
        Commands::List(args) => args.execute(),
        Commands::Preview(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag_on_subcommand() {
        let cli = Cli::try_parse_from(["tagged", "list", "--verbose", "a"]).unwrap();
        assert!(cli.command.verbose());

        let cli = Cli::try_parse_from(["tagged", "el", "p"]).unwrap();
        assert!(!cli.command.verbose());
    }
}
