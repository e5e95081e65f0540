//! Command implementations for all promptlib commands

use crate::cli::{Commands, StateCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use promptlib_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init(args) => crate::commands::init::execute(ctx, args.force),
            Commands::List(args) => {
                crate::commands::list::execute(ctx, args.category, args.tag.as_deref())
            }
            Commands::Show(args) => crate::commands::show::execute(ctx, &args.id),
            Commands::Tree => crate::commands::tree::execute(ctx),
            Commands::Nav(args) => {
                crate::commands::nav::execute(ctx, &args.location, args.from.as_deref())
            }
            Commands::Toggle(args) => crate::commands::toggle::execute(
                ctx,
                &args.path,
                !args.close,
                args.at.as_deref(),
            ),
            Commands::State(subcmd) => execute_state(ctx, &subcmd.command),
            Commands::Check => crate::commands::check::execute(ctx),
            Commands::Build(args) => {
                crate::commands::build::execute(ctx, args.out.as_deref(), args.with_state)
            }
        }
    }
}

fn execute_state(ctx: &CommandContext, command: &StateCommands) -> Result<()> {
    match command {
        StateCommands::Show => crate::commands::state::show(ctx),
        StateCommands::Clear => crate::commands::state::clear(ctx),
        StateCommands::Prune => crate::commands::state::prune(ctx),
    }
}
