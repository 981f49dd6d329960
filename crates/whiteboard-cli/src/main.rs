//! Whiteboard CLI - Command-line interface for the shared whiteboard.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use whiteboard_cli::{commands, config, Cli, CliError, Command, Formatter};
use whiteboard_ops::Whiteboard;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {:#}", e).red());
        let usage = e.downcast_ref::<CliError>().is_some_and(CliError::is_usage);
        std::process::exit(if usage { 2 } else { 1 });
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = config::resolve(&cli).context("Failed to load configuration")?;
    let board = Whiteboard::open(&config);
    tracing::debug!("Using board at {}", config.data_file.display());

    let formatter = Formatter::new(cli.format, !cli.no_color);

    let output = match cli.command {
        Command::View => commands::execute_view(&board, &formatter)?,
        Command::Add(args) => commands::execute_add(args, &board, &formatter)?,
        Command::Toggle(args) => commands::execute_toggle(args, &board, &formatter)?,
        Command::Clean(args) => commands::execute_clean(args, &board, &formatter)?,
        Command::Sections => commands::execute_sections(&board, &formatter)?,
    };
    println!("{}", output);

    Ok(())
}
