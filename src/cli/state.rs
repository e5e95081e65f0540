//! Sidebar state subcommands

use clap::{Args, Subcommand};

/// Arguments for the state command.
#[derive(Args, Debug)]
pub struct StateSubcommand {
    #[command(subcommand)]
    pub command: StateCommands,
}

/// State subcommands
#[derive(Subcommand, Debug)]
pub enum StateCommands {
    /// Print the persisted expansion state
    Show,

    /// Delete the persisted expansion state
    Clear,

    /// Drop persisted entries for categories that no longer exist
    Prune,
}
