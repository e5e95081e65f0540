//! CLI argument parsing for promptlib
//!
//! Global flags: --root, --config, --format, --quiet, --verbose, --log-level,
//! --log-json, --state-dir

pub mod args;
pub mod parse;
pub mod paths;
pub mod state;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BuildArgs, InitArgs, ListArgs, NavArgs, ShowArgs, ToggleArgs};
pub use promptlib_core::format::OutputFormat;
pub use state::{StateCommands, StateSubcommand};

/// Promptlib - prompt library site generator
#[derive(Parser, Debug)]
#[command(name = "promptlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the project
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit path to promptlib.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = parse::parse_output_format
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. debug, promptlib_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Directory holding persisted sidebar state
    #[arg(long, global = true, env = "PROMPTLIB_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level promptlib commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new prompt library project
    Init(InitArgs),

    /// List prompts
    List(ListArgs),

    /// Show a prompt
    Show(ShowArgs),

    /// Print the category tree in display order
    Tree,

    /// Show the sidebar state a page load at LOCATION would start with
    Nav(NavArgs),

    /// Expand or collapse a category and persist the result
    Toggle(ToggleArgs),

    /// Inspect or manage persisted sidebar state
    State(StateSubcommand),

    /// Validate every prompt's frontmatter
    Check,

    /// Render the static site
    Build(BuildArgs),
}
