//! `promptlib build` command - render the static site
//!
//! Pages are seeded from their own location only, unless `--with-state`
//! asks for the locally persisted sidebar state to be layered in.

use std::path::Path;

use crate::cli::paths::resolve_against;
use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use promptlib_core::error::Result;
use promptlib_core::expansion::{ExpansionStore, MemoryStorage};
use promptlib_core::site::{build_site, BuildReport};

/// Execute the build command
pub fn execute(ctx: &CommandContext, out: Option<&Path>, with_state: bool) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    trace_command!(cli, ctx.start, "load_collection");

    let out_dir = match out {
        Some(dir) => resolve_against(ctx.root, dir),
        None => project.out_dir(),
    };

    let report = if with_state {
        let store = ctx.expansion_store(&project);
        build_site(project.config(), &collection, &store, &out_dir)?
    } else {
        let store = ExpansionStore::for_site(MemoryStorage::new(), project.config());
        build_site(project.config(), &collection, &store, &out_dir)?
    };
    trace_command!(cli, ctx.start, "build_site");

    output_report(ctx, &report)
}

fn output_report(ctx: &CommandContext, report: &BuildReport) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let mut output = serde_json::to_value(report)?;
            if let Some(obj) = output.as_object_mut() {
                obj.insert("pages".to_string(), report.total_pages().into());
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Built {} pages ({} prompts, {} categories) into {}",
                    report.total_pages(),
                    report.prompt_pages,
                    report.category_pages,
                    report.out_dir.display()
                );
                if let Some(sitemap) = &report.sitemap {
                    println!("Sitemap: {}", sitemap.display());
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 mode=build out={} pages={} prompts={} categories={}",
                report.out_dir.display(),
                report.total_pages(),
                report.prompt_pages,
                report.category_pages
            );
        }
    }
    Ok(())
}
