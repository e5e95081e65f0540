//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use promptlib_core::error::Result;
use promptlib_core::expansion::{ExpansionStore, FileStorage};
use promptlib_core::project::Project;

/// Discover or open a project based on CLI configuration
pub fn discover_or_open_project(cli: &Cli, root: &PathBuf) -> Result<Project> {
    match &cli.config {
        Some(path) => Project::open(&resolve_against(root, path)),
        None => Project::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_project(&self) -> Result<Project> {
        discover_or_open_project(self.cli, self.root)
    }

    /// Expansion store backed by the project's state directory
    pub fn expansion_store(&self, project: &Project) -> ExpansionStore<FileStorage> {
        let state_dir = self
            .cli
            .state_dir
            .as_deref()
            .map(|dir| resolve_against(self.root, dir));
        ExpansionStore::for_site(project.state_storage(state_dir.as_deref()), project.config())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("promptlib {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A prompt library site generator.");
        println!();
        println!("Run `promptlib --help` for usage information.");
        Ok(())
    }
}
