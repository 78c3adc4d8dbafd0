//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use rotas_core::config::RotasConfig;
use rotas_core::error::Result;
use rotas_core::graph::{Graph, ShortestPathEngine};
use rotas_core::network::{load_network, sample_network};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RotasConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RotasConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Network file to load: `--network`, then the configured default.
    /// `None` selects the built-in sample network.
    pub fn network_path(&self) -> Option<PathBuf> {
        self.cli
            .network
            .clone()
            .or_else(|| self.config.default_network.clone())
    }

    pub fn load_graph(&self) -> Result<Graph<String>> {
        let graph = match self.network_path() {
            Some(path) => load_network(&path)?,
            None => sample_network()?,
        };

        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_graph"
        );

        Ok(graph)
    }

    /// Routing engine with the frontier from `--frontier` or configuration
    pub fn engine(&self) -> ShortestPathEngine {
        ShortestPathEngine::with_frontier(self.cli.frontier.unwrap_or(self.config.frontier))
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
        println!("rotas {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Fastest travel routes across a multimodal transportation network.");
        println!();
        println!("Run `rotas --help` for usage information.");
        Ok(())
    }
}
