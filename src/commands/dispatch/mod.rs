//! Command dispatch logic for waypath

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use waypath_core::error::Result;

mod command;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    tracing::debug!(elapsed = ?start.elapsed(), cwd = %ctx.cwd.display(), "resolve_cwd");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route {
                origin,
                destination,
                clearance,
                criterion,
            } => commands::route::execute(
                ctx,
                commands::route::RouteArgs {
                    origin,
                    destination,
                    clearance: *clearance,
                    criterion: *criterion,
                },
            ),
            Commands::Neighbors { node } => commands::neighbors::execute(ctx, node),
            Commands::Graph { clearance } => commands::graph::execute(ctx, *clearance),
        }
    }
}
