//! Command dispatch logic for rotas

use std::time::Instant;

use crate::cli::{Cli, Commands};
use rotas_core::config::RotasConfig;
use rotas_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => RotasConfig::load_from(path)?,
        None => RotasConfig::load()?,
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Routes { origin } => crate::commands::routes::execute(ctx, origin),
            Commands::Path {
                origin,
                destination,
            } => crate::commands::path::execute(ctx, origin, destination),
            Commands::Nodes => crate::commands::nodes::execute(ctx),
        }
    }
}
