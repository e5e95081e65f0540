use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::Prompt;
use crate::error::{PromptlibError, Result};

/// File extensions recognised as prompt files
pub const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// A prompt file that failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    pub path: PathBuf,
    pub reason: String,
}

/// The loaded prompt collection, ordered by id
#[derive(Debug, Clone, Default)]
pub struct Collection {
    prompts: Vec<Prompt>,
}

impl Collection {
    pub fn new(mut prompts: Vec<Prompt>) -> Self {
        prompts.sort_by(|a, b| a.id.cmp(&b.id));
        for pair in prompts.windows(2) {
            if pair[0].id == pair[1].id {
                tracing::warn!(id = %pair[0].id, "duplicate prompt id");
            }
        }
        Collection { prompts }
    }

    /// Load every prompt under `dir`, failing on the first invalid file
    #[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> Result<Self> {
        let mut prompts = Vec::new();
        for (id, path) in discover(dir)? {
            prompts.push(read_prompt(id, &path)?);
        }
        tracing::debug!(count = prompts.len(), "loaded_collection");
        Ok(Collection::new(prompts))
    }

    /// Load every valid prompt under `dir` and report the invalid ones
    #[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
    pub fn scan(dir: &Path) -> Result<(Self, Vec<ContentIssue>)> {
        let mut prompts = Vec::new();
        let mut issues = Vec::new();
        for (id, path) in discover(dir)? {
            match read_prompt(id, &path) {
                Ok(prompt) => prompts.push(prompt),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid_prompt");
                    let reason = match e {
                        PromptlibError::InvalidFrontmatter { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    issues.push(ContentIssue { path, reason });
                }
            }
        }
        Ok((Collection::new(prompts), issues))
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Look up a prompt by id
    pub fn get(&self, id: &str) -> Result<&Prompt> {
        let id = id.trim_matches('/');
        self.prompts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PromptlibError::PromptNotFound { id: id.to_string() })
    }

    /// Prompts whose folder is `path` or lies beneath it
    pub fn under<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Prompt> + 'a {
        self.prompts.iter().filter(move |p| {
            let folder = p.folder();
            folder == path
                || folder
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

/// Find prompt files under `dir`, paired with their ids, sorted by id
fn discover(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(PromptlibError::ContentDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| PromptlibError::io_operation("walk", dir.display(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_content = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext));
        if !is_content {
            continue;
        }
        if let Some(id) = content_id(dir, path) {
            found.push((id, path.to_path_buf()));
        }
    }
    found.sort();
    Ok(found)
}

/// Id of a content file: extension removed, every segment slugified,
/// `/`-joined, with a trailing `/index` dropped
pub fn content_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let segments: Vec<String> = relative
        .components()
        .map(|c| slug::slugify(c.as_os_str().to_string_lossy()))
        .collect();
    if segments.is_empty() {
        return None;
    }
    let id = segments.join("/");
    match id.strip_suffix("/index") {
        Some(parent) => Some(parent.to_string()),
        None => Some(id),
    }
}

fn read_prompt(id: String, path: &Path) -> Result<Prompt> {
    let content =
        fs::read_to_string(path).map_err(|e| PromptlibError::io_operation("read", path.display(), e))?;
    Prompt::parse(id, &content, path)
}
