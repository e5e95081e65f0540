//! `promptlib check` command - validate every prompt file
//!
//! Reports all invalid files rather than stopping at the first one, and
//! exits with the data error code when any is found.

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use promptlib_core::content::Collection;
use promptlib_core::error::{PromptlibError, Result};
use promptlib_core::records::{escape_quotes, path_relative_to_cwd};

/// Execute the check command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let (collection, issues) = Collection::scan(&project.content_dir())?;

    match cli.format {
        OutputFormat::Json => {
            let invalid: Vec<_> = issues
                .iter()
                .map(|issue| {
                    serde_json::json!({
                        "path": issue.path.display().to_string(),
                        "reason": issue.reason,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "valid": collection.len(),
                "invalid": invalid,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for issue in &issues {
                println!("{}: {}", path_relative_to_cwd(&issue.path), issue.reason);
            }
            if !cli.quiet {
                println!(
                    "{} valid, {} invalid",
                    collection.len(),
                    issues.len()
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 mode=check valid={} invalid={}",
                collection.len(),
                issues.len()
            );
            for issue in &issues {
                println!(
                    "E {} \"{}\"",
                    path_relative_to_cwd(&issue.path),
                    escape_quotes(&issue.reason)
                );
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(PromptlibError::ValidationFailed {
            count: issues.len(),
        })
    }
}
