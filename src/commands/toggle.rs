//! `promptlib toggle` command - expand or collapse a category
//!
//! Replays a user toggle: the state is initialized for the page the toggle
//! happens on, the toggle is applied and the full result is persisted.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::nav::open_word;
use promptlib_core::error::{PromptlibError, Result};
use promptlib_core::tree::CategoryTree;

/// Execute the toggle command
pub fn execute(ctx: &CommandContext, path: &str, is_open: bool, at: Option<&str>) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    let tree = CategoryTree::build(collection.prompts());

    let path = path.trim_matches('/');
    match tree.find(path) {
        None => {
            return Err(PromptlibError::CategoryNotFound {
                path: path.to_string(),
            })
        }
        Some(node) if !node.has_children() => {
            return Err(PromptlibError::invalid_value(
                "toggle target",
                format!("{} has no subcategories", path),
            ))
        }
        Some(_) => {}
    }

    let location = at
        .map(str::to_string)
        .unwrap_or_else(|| project.config().home_href());
    let mut store = ctx.expansion_store(&project);
    let state = store.initialize(&location);
    let next = store.on_toggle(&state, path, is_open);
    trace_command!(cli, ctx.start, "toggle");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "expanded": is_open,
                "location": location,
                "state": next.entries(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let verb = if is_open { "Expanded" } else { "Collapsed" };
                println!("{} {}", verb, path);
            }
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 mode=toggle path={} entries={}",
                path,
                next.len()
            );
            for (entry, open) in next.entries() {
                println!("S {} {}", entry, open_word(*open));
            }
        }
    }

    Ok(())
}
