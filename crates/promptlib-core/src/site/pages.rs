//! Main-column content for each page kind

use super::html::{escape, markdown};
use crate::config::SiteConfig;
use crate::content::Prompt;
use crate::tree::CategoryNode;

/// Body of a single prompt page
pub fn prompt_main(prompt: &Prompt) -> String {
    let fm = &prompt.frontmatter;
    let mut out = String::new();

    out.push_str(&format!("<article>\n<h1>{}</h1>\n", escape(&fm.title)));
    out.push_str(&format!("<p class=\"description\">{}</p>\n", escape(&fm.description)));
    out.push_str(&format!(
        "<p class=\"meta\"><span class=\"category\">{}</span> &middot; <time datetime=\"{}\">{}</time></p>\n",
        fm.category,
        fm.pub_date.to_rfc3339(),
        fm.pub_date.format("%b %-d, %Y")
    ));
    if !fm.tags.is_empty() {
        out.push_str("<p class=\"tags\">");
        for tag in &fm.tags {
            out.push_str(&format!("<span class=\"tag\">{}</span>", escape(tag)));
        }
        out.push_str("</p>\n");
    }
    out.push_str(
        "<button type=\"button\" class=\"copy-button\" data-copy-target=\"prompt-source\">Copy</button>\n",
    );
    out.push_str(&format!(
        "<textarea id=\"prompt-source\" hidden>{}</textarea>\n",
        escape(&prompt.body)
    ));
    out.push_str(&format!(
        "<div class=\"prompt-body\">\n{}</div>\n</article>",
        markdown(&prompt.body)
    ));
    out
}

/// Body of a category index page listing the prompts beneath it
pub fn category_main<'a>(
    config: &SiteConfig,
    node: &CategoryNode,
    prompts: impl IntoIterator<Item = &'a Prompt>,
) -> String {
    let mut out = format!("<h1>{}</h1>\n", escape(&node.name));
    out.push_str(&prompt_list(config, prompts));
    out
}

/// Body of the home page
pub fn home_main<'a>(config: &SiteConfig, prompts: impl IntoIterator<Item = &'a Prompt>) -> String {
    let mut recent: Vec<&Prompt> = prompts.into_iter().collect();
    recent.sort_by(|a, b| {
        b.frontmatter
            .pub_date
            .cmp(&a.frontmatter.pub_date)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut out = format!("<h1>{}</h1>\n", escape(&config.title));
    out.push_str(&prompt_list(config, recent));
    out
}

fn prompt_list<'a>(config: &SiteConfig, prompts: impl IntoIterator<Item = &'a Prompt>) -> String {
    let mut items = String::new();
    for prompt in prompts {
        items.push_str(&format!(
            "<li><a href=\"{}\">{}</a> <span class=\"meta\">{}</span><br>{}</li>\n",
            escape(&config.prompt_href(&prompt.id)),
            escape(prompt.title()),
            prompt.category(),
            escape(&prompt.frontmatter.description)
        ));
    }
    if items.is_empty() {
        "<p>No prompts yet.</p>".to_string()
    } else {
        format!("<ul class=\"prompt-list\">\n{}</ul>", items)
    }
}
