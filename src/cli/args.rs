//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::parse_category;
use promptlib_core::content::Category;

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing promptlib.toml
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the list command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category (Coding, Writing, Productivity, Other)
    #[arg(long, short, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Filter by tag
    #[arg(long, short)]
    pub tag: Option<String>,
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Prompt id, e.g. coding/debugging/explain-error
    pub id: String,
}

/// Arguments for the nav command.
#[derive(Args, Debug)]
pub struct NavArgs {
    /// Page location, e.g. /prompt-library/prompts/coding/debugging
    pub location: String,

    /// Previous page location; the state loaded there is carried to LOCATION
    #[arg(long, value_name = "LOCATION")]
    pub from: Option<String>,
}

/// Arguments for the toggle command.
#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Category path, e.g. coding/debugging
    pub path: String,

    /// Collapse instead of expand
    #[arg(long)]
    pub close: bool,

    /// Page location the toggle happens on (default: the home page)
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the build command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory (default: out_dir from promptlib.toml)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Seed every page's sidebar with the locally persisted state
    #[arg(long)]
    pub with_state: bool,
}
