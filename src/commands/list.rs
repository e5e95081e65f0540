//! `promptlib list` command - list prompts
//!
//! Ordered by id. `--category` and `--tag` narrow the result.

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use promptlib_core::content::{Category, Prompt};
use promptlib_core::error::Result;
use promptlib_core::records::escape_quotes;

/// Execute the list command
pub fn execute(ctx: &CommandContext, category: Option<Category>, tag: Option<&str>) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    trace_command!(cli, ctx.start, "load_collection");

    let prompts: Vec<&Prompt> = collection
        .prompts()
        .iter()
        .filter(|p| matches_filters(p, category, tag))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = prompts
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "title": p.title(),
                        "description": p.frontmatter.description,
                        "category": p.category(),
                        "tags": p.frontmatter.tags,
                        "pubDate": p.frontmatter.pub_date,
                        "path": p.path.as_ref().map(|path| path.display().to_string()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if prompts.is_empty() {
                if !cli.quiet {
                    println!("No prompts found");
                }
                return Ok(());
            }
            for prompt in &prompts {
                println!("{} [{}] {}", prompt.id, prompt.category(), prompt.title());
            }
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 root={} mode=list prompts={}",
                project.root().display(),
                prompts.len()
            );
            for prompt in &prompts {
                println!(
                    "P {} {} \"{}\" tags={}",
                    prompt.id,
                    prompt.category(),
                    escape_quotes(prompt.title()),
                    prompt.frontmatter.format_tags()
                );
            }
        }
    }

    Ok(())
}

fn matches_filters(prompt: &Prompt, category: Option<Category>, tag: Option<&str>) -> bool {
    category.is_none_or(|c| prompt.category() == c)
        && tag.is_none_or(|t| prompt.frontmatter.tags.iter().any(|pt| pt == t))
}
