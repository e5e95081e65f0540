//! `promptlib tree` command - print the category tree

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use promptlib_core::error::Result;
use promptlib_core::records::escape_quotes;
use promptlib_core::tree::{sorted, CategoryNode, CategoryTree};

/// A category node in display order, for JSON output
#[derive(Debug, Serialize)]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    pub children: Vec<TreeEntry>,
}

impl TreeEntry {
    fn from_node(node: &CategoryNode) -> Self {
        TreeEntry {
            name: node.name.clone(),
            path: node.path.clone(),
            expanded: None,
            active: false,
            children: sorted(&node.children)
                .into_iter()
                .map(TreeEntry::from_node)
                .collect(),
        }
    }

    /// Entries for every root, siblings ordered for display
    pub fn forest(tree: &CategoryTree) -> Vec<TreeEntry> {
        sorted(tree.roots())
            .into_iter()
            .map(TreeEntry::from_node)
            .collect()
    }
}

/// Execute the tree command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let project = ctx.discover_or_open_project()?;
    let collection = project.load_collection()?;
    let tree = CategoryTree::build(collection.prompts());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&TreeEntry::forest(&tree))?);
        }
        OutputFormat::Human => {
            if tree.is_empty() {
                if !cli.quiet {
                    println!("No categories found");
                }
                return Ok(());
            }
            for (depth, node) in tree.walk() {
                println!("{}{} ({})", "  ".repeat(depth), node.name, node.path);
            }
        }
        OutputFormat::Records => {
            println!(
                "H promptlib=1 records=1 root={} mode=tree nodes={}",
                project.root().display(),
                tree.len()
            );
            for (depth, node) in tree.walk() {
                println!("T {} {} \"{}\"", depth, node.path, escape_quotes(&node.name));
            }
        }
    }

    Ok(())
}
