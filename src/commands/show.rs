//! `promptlib show` command - display one prompt

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use promptlib_core::error::Result;
use promptlib_core::records::escape_quotes;

/// Execute the show command
pub fn execute(ctx: &CommandContext, id: &str) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    let prompt = collection.get(id)?;
    let fm = &prompt.frontmatter;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": prompt.id,
                "title": fm.title,
                "description": fm.description,
                "category": fm.category,
                "tags": fm.tags,
                "pubDate": fm.pub_date,
                "path": prompt.path.as_ref().map(|p| p.display().to_string()),
                "url": project.config().prompt_href(&prompt.id),
                "body": prompt.body,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", fm.title);
            println!();
            println!("ID:          {}", prompt.id);
            println!("Category:    {}", fm.category);
            println!("Tags:        {}", fm.format_tags());
            println!("Published:   {}", fm.pub_date.format("%Y-%m-%d"));
            println!("URL:         {}", project.config().prompt_href(&prompt.id));
            println!("Description: {}", fm.description);
            println!();
            print!("{}", prompt.body);
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 root={} mode=show id={}",
                project.root().display(),
                prompt.id
            );
            println!(
                "P {} {} \"{}\" tags={}",
                prompt.id,
                fm.category,
                escape_quotes(&fm.title),
                fm.format_tags()
            );
            println!("D {} {}", prompt.id, fm.description);
            println!("B {}", prompt.id);
            for line in prompt.body.lines() {
                println!("{}", line);
            }
            println!("B-END");
        }
    }

    Ok(())
}
