//! Static site renderer
//!
//! Every page embeds the sidebar with the expansion state initialized for
//! that page's own location, so the active path is open on first paint.
//! The inline sidebar script then layers the browser's persisted toggles on
//! top.

pub mod html;
pub mod pages;
pub mod sidebar;
pub mod sitemap;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

pub use sidebar::render_sidebar;

use crate::config::SiteConfig;
use crate::content::Collection;
use crate::error::{PromptlibError, Result};
use crate::expansion::{ExpansionStore, StateStorage};
use crate::trace_time;
use crate::tree::CategoryTree;

/// Summary of a site build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub prompt_pages: usize,
    pub category_pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<PathBuf>,
}

impl BuildReport {
    pub fn total_pages(&self) -> usize {
        // +1 for the home page
        self.prompt_pages + self.category_pages + 1
    }
}

/// Render the whole site into `out_dir`
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display(), prompts = collection.len()))]
pub fn build_site<S: StateStorage>(
    config: &SiteConfig,
    collection: &Collection,
    store: &ExpansionStore<S>,
    out_dir: &Path,
) -> Result<BuildReport> {
    let start = Instant::now();
    let tree = CategoryTree::build(collection.prompts());
    let mut hrefs = vec![config.home_href()];

    let location = config.home_href();
    let state = store.initialize(&location);
    let page = html::layout(
        config,
        &config.title,
        &render_sidebar(config, &tree, &state, &location),
        &pages::home_main(config, collection.prompts()),
    );
    write_page(&out_dir.join("index.html"), &page)?;

    let mut category_pages = 0;
    for (_, node) in tree.walk() {
        let location = config.prompt_href(&node.path);
        let state = store.initialize(&location);
        let page = html::layout(
            config,
            &node.name,
            &render_sidebar(config, &tree, &state, &location),
            &pages::category_main(config, node, collection.under(&node.path)),
        );
        write_page(&page_path(out_dir, &node.path), &page)?;
        hrefs.push(location);
        category_pages += 1;
    }

    let mut prompt_pages = 0;
    for prompt in collection.prompts() {
        if tree.contains(&prompt.id) {
            tracing::warn!(id = %prompt.id, "prompt page replaces category page of the same path");
        }
        let location = config.prompt_href(&prompt.id);
        let state = store.initialize(&location);
        let page = html::layout(
            config,
            prompt.title(),
            &render_sidebar(config, &tree, &state, &location),
            &pages::prompt_main(prompt),
        );
        write_page(&page_path(out_dir, &prompt.id), &page)?;
        hrefs.push(location);
        prompt_pages += 1;
    }

    let sitemap = match config.site {
        Some(_) => {
            let urls: Vec<String> = hrefs
                .iter()
                .filter_map(|href| config.absolute_url(href))
                .collect();
            let path = out_dir.join("sitemap.xml");
            write_page(&path, &sitemap::render_sitemap(urls.iter().map(String::as_str)))?;
            Some(path)
        }
        None => None,
    };

    trace_time!(start, "build_site", pages = prompt_pages + category_pages + 1);
    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        prompt_pages,
        category_pages,
        sitemap,
    })
}

fn page_path(out_dir: &Path, path: &str) -> PathBuf {
    let mut page = out_dir.join("prompts");
    for segment in path.split('/') {
        page.push(segment);
    }
    page.join("index.html")
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PromptlibError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, contents).map_err(|e| PromptlibError::io_operation("write", path.display(), e))
}
