use std::collections::BTreeSet;

use super::html::{escape, state_key_attr};
use crate::config::SiteConfig;
use crate::expansion::{compute_active_paths, ExpansionState};
use crate::tree::{sorted, CategoryNode, CategoryTree};

/// Render the navigation sidebar for a page at `current_path`.
///
/// Nodes with children become `<details>` groups, open when expanded in
/// `state`. Siblings are ordered by name on every render.
pub fn render_sidebar(
    config: &SiteConfig,
    tree: &CategoryTree,
    state: &ExpansionState,
    current_path: &str,
) -> String {
    let active = compute_active_paths(&config.prompts_prefix(), current_path);
    let mut out = String::new();

    out.push_str(&format!(
        "<nav class=\"sidebar\" data-state-key=\"{}\">\n",
        state_key_attr()
    ));
    out.push_str(&format!(
        "<div class=\"sidebar-header\"><a href=\"{}\"><span class=\"font-semibold\">{}</span></a></div>\n",
        escape(&config.home_href()),
        escape(&config.title)
    ));
    out.push_str("<div class=\"sidebar-group\">\n<div class=\"sidebar-group-label\">Categories</div>\n");
    out.push_str("<ul class=\"sidebar-menu\">\n");
    for node in sorted(tree.roots()) {
        render_node(&mut out, config, node, state, &active);
    }
    out.push_str("</ul>\n</div>\n</nav>");
    out
}

fn render_node(
    out: &mut String,
    config: &SiteConfig,
    node: &CategoryNode,
    state: &ExpansionState,
    active: &BTreeSet<String>,
) {
    let href = escape(&config.prompt_href(&node.path));
    let name = escape(&node.name);
    let is_active = active.contains(&node.path);
    let current = if active.last() == Some(&node.path) {
        " aria-current=\"page\""
    } else {
        ""
    };

    out.push_str("<li class=\"sidebar-menu-item\">");
    if !node.has_children() {
        out.push_str(&format!(
            "<a href=\"{href}\"{current}><span>{name}</span></a></li>\n"
        ));
        return;
    }

    out.push_str(&format!(
        "<details data-path=\"{}\"{}{}>",
        escape(&node.path),
        if is_active { " data-active" } else { "" },
        if state.is_expanded(&node.path) { " open" } else { "" }
    ));
    out.push_str(&format!(
        "<summary><a href=\"{href}\"{current}><span>{name}</span></a>\
         <span class=\"sr-only\">Toggle {name}</span></summary>\n"
    ));
    out.push_str("<ul class=\"sidebar-menu-sub\">\n");
    for child in sorted(&node.children) {
        render_node(out, config, child, state, active);
    }
    out.push_str("</ul></details></li>\n");
}
