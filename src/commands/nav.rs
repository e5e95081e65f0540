//! `promptlib nav` command - preview the sidebar for a page location
//!
//! Initializes the expansion state for LOCATION from the persisted state
//! and prints what the sidebar would show. With `--from`, the state is
//! initialized at the previous location and then carried to LOCATION by a
//! navigation, which only ever forces the new active paths open. Nothing is
//! written back.

use std::collections::BTreeSet;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::tree::TreeEntry;
use promptlib_core::error::Result;
use promptlib_core::expansion::ExpansionState;
use promptlib_core::tree::{CategoryNode, CategoryTree};

/// Outcome of navigating from one location to another
struct Transition<'a> {
    from: &'a str,
    /// Active paths that were collapsed or unknown before the navigation
    opened: Vec<String>,
    /// The navigation kept the previous snapshot
    unchanged: bool,
}

/// Execute the nav command
pub fn execute(ctx: &CommandContext, location: &str, from: Option<&str>) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    let tree = CategoryTree::build(collection.prompts());

    let store = ctx.expansion_store(&project);
    let active = store.compute_active_paths(location);
    let (state, transition) = match from {
        Some(from) => {
            let prev = store.initialize(from);
            let next = store.on_navigate(&prev, location);
            trace_command!(cli, ctx.start, "navigate_state");
            let transition = Transition {
                from,
                opened: active
                    .iter()
                    .filter(|path| !prev.is_expanded(path))
                    .cloned()
                    .collect(),
                unchanged: next.same_snapshot(&prev),
            };
            (next, Some(transition))
        }
        None => {
            let state = store.initialize(location);
            trace_command!(cli, ctx.start, "initialize_state");
            (state, None)
        }
    };

    match cli.format {
        OutputFormat::Json => {
            let mut entries = TreeEntry::forest(&tree);
            annotate(&mut entries, &state, &active);
            let mut output = serde_json::json!({
                "location": location,
                "active": active,
                "state": state.entries(),
                "tree": entries,
            });
            if let Some(t) = &transition {
                output["from"] = serde_json::json!(t.from);
                output["opened"] = serde_json::json!(t.opened);
                output["unchanged"] = serde_json::json!(t.unchanged);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if let Some(t) = &transition {
                println!("From:     {}", t.from);
            }
            println!("Location: {}", location);
            println!("Active:   {}", join_or_dash(active.iter()));
            if let Some(t) = &transition {
                println!("Opened:   {}", join_or_dash(t.opened.iter()));
                if t.unchanged {
                    println!("State unchanged");
                }
            }
            println!();
            for node in promptlib_core::tree::sorted(tree.roots()) {
                print_visible(node, 0, &state, &active);
            }
        }
        OutputFormat::Records => print_records(location, &active, &state, transition.as_ref()),
    }

    Ok(())
}

fn print_records(
    location: &str,
    active: &BTreeSet<String>,
    state: &ExpansionState,
    transition: Option<&Transition<'_>>,
) {
    let moved = transition
        .map(|t| {
            format!(
                " from={} opened={} unchanged={}",
                t.from,
                t.opened.len(),
                t.unchanged
            )
        })
        .unwrap_or_default();
    println!(
        "H promptlib=1 records=1 mode=nav location={} active={} entries={}{}",
        location,
        active.len(),
        state.len(),
        moved
    );
    for path in active {
        println!("A {}", path);
    }
    for path in transition.iter().flat_map(|t| &t.opened) {
        println!("O {}", path);
    }
    for (path, open) in state.entries() {
        println!("S {} {}", path, open_word(*open));
    }
}

fn join_or_dash<'a>(paths: impl Iterator<Item = &'a String>) -> String {
    let paths: Vec<&str> = paths.map(String::as_str).collect();
    if paths.is_empty() {
        "-".to_string()
    } else {
        paths.join(", ")
    }
}

fn annotate(entries: &mut [TreeEntry], state: &ExpansionState, active: &BTreeSet<String>) {
    for entry in entries {
        if !entry.children.is_empty() {
            entry.expanded = Some(state.is_expanded(&entry.path));
        }
        entry.active = active.contains(&entry.path);
        annotate(&mut entry.children, state, active);
    }
}

/// Print a node and, when it is expanded, its children.
///
/// `[-]` expanded, `[+]` collapsed, `*` on the active path.
fn print_visible(node: &CategoryNode, depth: usize, state: &ExpansionState, active: &BTreeSet<String>) {
    let expanded = state.is_expanded(&node.path);
    let marker = match (node.has_children(), expanded) {
        (false, _) => "   ",
        (true, true) => "[-]",
        (true, false) => "[+]",
    };
    let current = if active.contains(&node.path) { " *" } else { "" };
    println!("{}{} {}{}", "  ".repeat(depth), marker, node.name, current);

    if node.has_children() && expanded {
        for child in promptlib_core::tree::sorted(&node.children) {
            print_visible(child, depth + 1, state, active);
        }
    }
}

pub(crate) fn open_word(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}
