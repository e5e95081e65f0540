//! `promptlib state` commands - inspect and manage persisted sidebar state

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::nav::open_word;
use promptlib_core::error::Result;
use promptlib_core::expansion::ExpansionState;
use promptlib_core::tree::CategoryTree;

/// Print the persisted state
pub fn show(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let store = ctx.expansion_store(&project);
    let persisted = store.load_persisted();

    match cli.format {
        OutputFormat::Json => {
            let state = persisted.unwrap_or_default();
            println!("{}", serde_json::to_string_pretty(state.entries())?);
        }
        OutputFormat::Human => match persisted {
            Some(state) if !state.is_empty() => {
                for (path, open) in state.entries() {
                    println!("{} {}", path, open_word(*open));
                }
            }
            _ => {
                if !cli.quiet {
                    println!("No persisted sidebar state");
                }
            }
        },
        OutputFormat::Records => {
            let state = persisted.unwrap_or_default();
            print_records("show", &state);
        }
    }

    Ok(())
}

/// Delete the persisted state
pub fn clear(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let mut store = ctx.expansion_store(&project);
    store.clear()?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "status": "ok", "cleared": true }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Cleared sidebar state");
            }
        }
        OutputFormat::Records => {
            println!("H promptlib=1 records=1 mode=state-clear status=ok");
        }
    }

    Ok(())
}

/// Remove persisted entries whose category no longer exists
pub fn prune(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    let tree = CategoryTree::build(collection.prompts());

    let mut store = ctx.expansion_store(&project);
    let Some(persisted) = store.load_persisted() else {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "removed": [], "remaining": 0 }));
            }
            OutputFormat::Human => {
                if !cli.quiet {
                    println!("No persisted sidebar state");
                }
            }
            OutputFormat::Records => print_records("state-prune", &ExpansionState::new()),
        }
        return Ok(());
    };

    let pruned = persisted.pruned(&tree);
    let removed: Vec<&String> = persisted
        .entries()
        .keys()
        .filter(|path| pruned.get(path).is_none())
        .collect();
    if !removed.is_empty() {
        store.persist(&pruned)?;
    }
    tracing::debug!(removed = removed.len(), remaining = pruned.len(), "pruned_state");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "removed": removed,
                "remaining": pruned.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for path in &removed {
                    println!("Removed {}", path);
                }
                println!(
                    "Pruned {} entr{}, {} remaining",
                    removed.len(),
                    if removed.len() == 1 { "y" } else { "ies" },
                    pruned.len()
                );
            }
        }
        OutputFormat::Records => {
            for path in &removed {
                println!("R {}", path);
            }
            print_records("state-prune", &pruned);
        }
    }

    Ok(())
}

fn print_records(mode: &str, state: &ExpansionState) {
    println!(
        "H promptlib=1 records=1 mode={} entries={}",
        mode,
        state.len()
    );
    for (path, open) in state.entries() {
        println!("S {} {}", path, open_word(*open));
    }
}
