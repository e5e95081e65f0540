//! Prompt content collection
//!
//! Prompts are markdown files with a YAML frontmatter header, organised into
//! category folders under the content directory. A prompt's id is its path
//! relative to that directory with every segment slugified, unless the
//! frontmatter sets `slug`.

pub mod collection;
pub mod frontmatter;
mod parse;

use std::path::{Path, PathBuf};

use serde::Serialize;

pub use collection::{Collection, ContentIssue, CONTENT_EXTENSIONS};
pub use frontmatter::{coerce_date, Category, PromptFrontmatter};

use crate::error::Result;

/// Anything addressable by a slash-delimited content id
pub trait ContentItem {
    fn id(&self) -> &str;
}

impl ContentItem for str {
    fn id(&self) -> &str {
        self
    }
}

impl ContentItem for String {
    fn id(&self) -> &str {
        self
    }
}

impl<T: ContentItem + ?Sized> ContentItem for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// A parsed prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    /// Slash-delimited id, e.g. `coding/debugging/fix`
    pub id: String,
    /// Parsed frontmatter
    #[serde(flatten)]
    pub frontmatter: PromptFrontmatter,
    /// Markdown body after the frontmatter
    #[serde(skip)]
    pub body: String,
    /// Source file, when loaded from disk
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Prompt {
    /// Parse a prompt from file content.
    ///
    /// A non-empty frontmatter `slug` takes the place of `id`.
    pub fn parse(id: impl Into<String>, content: &str, path: &Path) -> Result<Self> {
        let (frontmatter, body) = parse::parse_frontmatter(content, path)?;
        let id = match frontmatter.slug.as_deref().map(|s| s.trim_matches('/')) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => id.into(),
        };
        Ok(Prompt {
            id,
            frontmatter,
            body,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn category(&self) -> Category {
        self.frontmatter.category
    }

    /// Category folder segments of the id (everything but the filename)
    pub fn folder(&self) -> &str {
        self.id.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }
}

impl ContentItem for Prompt {
    fn id(&self) -> &str {
        &self.id
    }
}
