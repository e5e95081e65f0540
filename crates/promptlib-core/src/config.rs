//! Site configuration for promptlib
//!
//! Configuration is stored in `promptlib.toml` at the project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PromptlibError, Result};

/// Configuration file name
pub const CONFIG_FILE: &str = "promptlib.toml";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title shown in the sidebar header
    #[serde(default = "default_title")]
    pub title: String,

    /// Absolute site origin used for the sitemap (e.g. "https://example.github.io")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// URL base path the site is served under (e.g. "/prompt-library")
    #[serde(default = "default_base")]
    pub base: String,

    /// Prompt collection directory, relative to the project root
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Build output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Directory holding persisted sidebar state, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

fn default_title() -> String {
    "Prompt Library".to_string()
}

fn default_base() -> String {
    "/prompt-library".to_string()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("src/content/prompts")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            site: None,
            base: default_base(),
            content_dir: default_content_dir(),
            out_dir: default_out_dir(),
            state_dir: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PromptlibError::io_operation("read", path.display(), e))?;
        let config: SiteConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PromptlibError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Base path normalized to a leading slash and no trailing slash.
    ///
    /// An empty or "/" base normalizes to "".
    pub fn base_path(&self) -> String {
        let trimmed = self.base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }

    /// URL prefix under which prompt and category pages live (`<base>/prompts/`)
    pub fn prompts_prefix(&self) -> String {
        format!("{}/prompts/", self.base_path())
    }

    /// Link to the site home page
    pub fn home_href(&self) -> String {
        let base = self.base_path();
        if base.is_empty() {
            "/".to_string()
        } else {
            base
        }
    }

    /// Link to a category or prompt page
    pub fn prompt_href(&self, path: &str) -> String {
        format!("{}{}", self.prompts_prefix(), path)
    }

    /// Absolute URL for a site-relative href, if a site origin is configured
    pub fn absolute_url(&self, href: &str) -> Option<String> {
        self.site
            .as_deref()
            .map(|site| format!("{}{}", site.trim_end_matches('/'), href))
    }
}
