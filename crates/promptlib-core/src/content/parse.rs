use std::path::Path;

use super::frontmatter::PromptFrontmatter;
use crate::error::{PromptlibError, Result};

/// Parse YAML frontmatter from markdown content, returning it with the body
#[tracing::instrument(skip(content, path), fields(path = %path.display()))]
pub(crate) fn parse_frontmatter(content: &str, path: &Path) -> Result<(PromptFrontmatter, String)> {
    let invalid = |reason: String| PromptlibError::InvalidFrontmatter {
        path: path.to_path_buf(),
        reason,
    };

    let content = content.trim_start_matches('\u{feff}').trim_start();

    if !content.starts_with("---") {
        return Err(invalid("missing frontmatter delimiter (---)".to_string()));
    }

    let after_first = &content[3..];
    let end_pos = after_first
        .find("\n---")
        .ok_or_else(|| invalid("missing closing frontmatter delimiter (---)".to_string()))?;

    let yaml_content = &after_first[..end_pos];
    let rest = &after_first[end_pos + 4..];
    // Drop the remainder of the closing delimiter line
    let body = match rest.find('\n') {
        Some(idx) => rest[idx + 1..].trim_start_matches('\n').to_string(),
        None => String::new(),
    };

    let frontmatter: PromptFrontmatter =
        serde_yaml::from_str(yaml_content).map_err(|e| invalid(e.to_string()))?;

    if frontmatter.title.trim().is_empty() {
        return Err(invalid("missing required field: title".to_string()));
    }

    Ok((frontmatter, body))
}
