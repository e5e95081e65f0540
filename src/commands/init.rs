//! `promptlib init` command - create a new project
//!
//! Writes a default `promptlib.toml` and a sample prompt. Refuses to replace
//! an existing config unless `--force` is given.

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use promptlib_core::error::Result;
use promptlib_core::project::Project;

/// Execute the init command
pub fn execute(ctx: &CommandContext, force: bool) -> Result<()> {
    let cli = ctx.cli;
    let project = Project::init(ctx.root, force)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "root": project.root().display().to_string(),
                "config": project.config_path().display().to_string(),
                "content_dir": project.content_dir().display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Initialized promptlib project at {}", project.root().display());
                println!();
                println!("Add prompts under {}", project.content_dir().display());
            }
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 root={} mode=init status=ok",
                project.root().display()
            );
        }
    }

    Ok(())
}
