//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use whiteboard_domain::Priority;

/// Whiteboard CLI - Inspect and edit the shared whiteboard.
#[derive(Debug, Parser)]
#[command(name = "whiteboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WHITEBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Board data file (overrides the config file)
    #[arg(short, long, global = true, env = "WHITEBOARD_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the board (every section except the Archive)
    View,

    /// Add an item to a section
    Add(AddArgs),

    /// Mark an item completed, or active again with --undo
    Toggle(ToggleArgs),

    /// Move completed items to the Archive
    Clean(CleanArgs),

    /// List sections with their capacities
    Sections,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Section name (e.g. "Today's Tasks", case-insensitive)
    pub section: String,

    /// Item text
    pub content: String,

    /// Item priority
    #[arg(short, long, value_enum, ignore_case = true, default_value = "medium")]
    pub priority: PriorityArg,
}

/// Arguments for the toggle command.
#[derive(Debug, Parser)]
pub struct ToggleArgs {
    /// Item ID as shown by `view`
    pub id: u64,

    /// Mark the item active instead of completed
    #[arg(short, long)]
    pub undo: bool,
}

/// Arguments for the clean command.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Report what would move without changing the board
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Priority argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PriorityArg {
    /// Do it first
    High,
    /// Default
    Medium,
    /// Whenever
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(priority: PriorityArg) -> Self {
        match priority {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}
