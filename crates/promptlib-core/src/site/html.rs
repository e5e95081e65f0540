//! HTML helpers shared by every page

use crate::config::SiteConfig;
use crate::expansion::STATE_KEY;

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render markdown to HTML
pub fn markdown(source: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; display: flex; min-height: 100vh; }
nav.sidebar { width: 16rem; flex-shrink: 0; border-right: 1px solid #e5e7eb; padding: 1rem; }
nav.sidebar ul { list-style: none; margin: 0; padding-left: 0; }
nav.sidebar ul ul { padding-left: 1rem; border-left: 1px solid #e5e7eb; }
nav.sidebar a { color: inherit; text-decoration: none; }
nav.sidebar a[aria-current] { font-weight: 600; }
nav.sidebar summary { cursor: pointer; }
.sidebar-group-label { font-size: 0.75rem; color: #6b7280; margin: 1rem 0 0.5rem; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
main { flex: 1; padding: 2rem; max-width: 48rem; }
.meta { color: #6b7280; font-size: 0.875rem; }
.tag { display: inline-block; background: #f3f4f6; border-radius: 0.25rem; padding: 0 0.4rem; margin-right: 0.25rem; }
"#;

/// Restores persisted toggles on load (active path always open) and
/// persists every user toggle under the same key the CLI uses.
const SIDEBAR_SCRIPT: &str = r#"
(function () {
  var nav = document.querySelector("nav[data-state-key]");
  if (!nav) return;
  var key = nav.getAttribute("data-state-key");
  var state = {};
  try {
    state = JSON.parse(localStorage.getItem(key) || "{}") || {};
  } catch (e) {
    console.warn("ignoring malformed sidebar state", e);
    state = {};
  }
  nav.querySelectorAll("details[data-path]").forEach(function (d) {
    var path = d.getAttribute("data-path");
    if (d.hasAttribute("data-active")) {
      state[path] = true;
    } else if (Object.prototype.hasOwnProperty.call(state, path)) {
      d.open = !!state[path];
    }
    d.querySelector("summary").addEventListener("click", function (e) {
      if (e.target.closest("a")) return;
      state[path] = !d.open;
      localStorage.setItem(key, JSON.stringify(state));
    });
  });
})();
"#;

const COPY_SCRIPT: &str = r#"
document.querySelectorAll("button[data-copy-target]").forEach(function (button) {
  button.addEventListener("click", function () {
    var source = document.getElementById(button.getAttribute("data-copy-target"));
    navigator.clipboard.writeText(source.value).then(function () {
      button.textContent = "Copied";
      setTimeout(function () { button.textContent = "Copy"; }, 2000);
    });
  });
});
"#;

/// Wrap a sidebar and main content into a complete document
pub fn layout(config: &SiteConfig, title: &str, sidebar: &str, main: &str) -> String {
    let page_title = if title == config.title {
        escape(title)
    } else {
        format!("{} | {}", escape(title), escape(&config.title))
    };
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{page_title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         {sidebar}\n<main>\n{main}\n</main>\n\
         <script>{SIDEBAR_SCRIPT}</script>\n<script>{COPY_SCRIPT}</script>\n</body>\n</html>\n"
    )
}

/// `data-state-key` attribute value read by the sidebar script
pub fn state_key_attr() -> String {
    escape(STATE_KEY)
}
