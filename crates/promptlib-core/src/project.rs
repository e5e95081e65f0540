//! Project discovery and initialization
//!
//! A project is a directory holding `promptlib.toml`. Discovery walks up from
//! the starting directory until it finds one. Every other location (content,
//! build output, persisted state) is resolved against the project root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{SiteConfig, CONFIG_FILE};
use crate::content::Collection;
use crate::error::{PromptlibError, Result};
use crate::expansion::FileStorage;

/// Default directory for persisted sidebar state, relative to the project root
pub const DEFAULT_STATE_DIR: &str = ".promptlib";

const SAMPLE_PROMPT_PATH: &str = "coding/debugging/explain-error.md";

const SAMPLE_PROMPT: &str = "---
title: Explain an error message
description: Ask for a plain-language explanation of a compiler or runtime error.
category: Coding
tags: [debugging, errors]
pubDate: 2024-01-15
---

I am getting the following error:

```
<paste the error here>
```

Explain what it means, the most likely causes, and how to fix it.
";

/// A discovered promptlib project
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: SiteConfig,
}

impl Project {
    /// Find the project containing `start`, walking up through its ancestors
    #[tracing::instrument(skip(start), fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        let config_path = find_config(start).ok_or_else(|| PromptlibError::ConfigNotFound {
            search_root: start.to_path_buf(),
        })?;
        Self::open(&config_path)
    }

    /// Open a project from an explicit config file
    pub fn open(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            return Err(PromptlibError::ConfigNotFound {
                search_root: config_path.to_path_buf(),
            });
        }
        let config = SiteConfig::load(config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(root = %root.display(), "opened_project");
        Ok(Project { root, config })
    }

    /// Write a default config and a sample prompt under `root`.
    ///
    /// Fails if a config already exists unless `force` is set. The sample
    /// prompt is only written when missing.
    pub fn init(root: &Path, force: bool) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() && !force {
            return Err(PromptlibError::already_exists(
                "config",
                config_path.display(),
            ));
        }

        fs::create_dir_all(root)
            .map_err(|e| PromptlibError::io_operation("create directory", root.display(), e))?;
        let config = SiteConfig::default();
        config.save(&config_path)?;

        let sample = root.join(&config.content_dir).join(SAMPLE_PROMPT_PATH);
        if !sample.exists() {
            if let Some(parent) = sample.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    PromptlibError::io_operation("create directory", parent.display(), e)
                })?;
            }
            fs::write(&sample, SAMPLE_PROMPT)
                .map_err(|e| PromptlibError::io_operation("write", sample.display(), e))?;
        }

        tracing::info!(root = %root.display(), "initialized_project");
        Ok(Project {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.config.content_dir)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.join(&self.config.out_dir)
    }

    /// Persisted state directory: `override_dir` if given, else the configured
    /// one, else `.promptlib` under the root
    pub fn state_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        match (override_dir, &self.config.state_dir) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => self.root.join(dir),
            (None, None) => self.root.join(DEFAULT_STATE_DIR),
        }
    }

    pub fn state_storage(&self, override_dir: Option<&Path>) -> FileStorage {
        FileStorage::new(self.state_dir(override_dir))
    }

    /// Load the prompt collection, failing on the first invalid prompt
    pub fn load_collection(&self) -> Result<Collection> {
        Collection::load(&self.content_dir())
    }
}

fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}
