//! Routes command: fastest route from one origin to every destination

pub mod human;
pub mod json;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use rotas_core::error::Result;
use rotas_core::graph::PathResult;

/// One destination row, shared by the JSON outputs
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry<'a> {
    pub destination: &'a str,
    /// Travel time in minutes (fractions kept), `null` when unreachable
    pub minutes: Option<f64>,
    pub reachable: bool,
    pub path: &'a [String],
    pub modes: Vec<&'a str>,
}

impl<'a> RouteEntry<'a> {
    pub fn new(destination: &'a str, result: &'a PathResult<String>) -> Self {
        Self {
            destination,
            minutes: result
                .is_reachable()
                .then(|| result.distance.minutes()),
            reachable: result.is_reachable(),
            path: &result.path,
            modes: result.modes.iter().map(|m| m.as_str()).collect(),
        }
    }
}

/// Execute the routes command
pub fn execute(ctx: &CommandContext, origin: &str) -> Result<()> {
    let graph = ctx.load_graph()?;
    let paths = ctx.engine().compute(&graph, &origin.to_string())?;

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        reachable = paths.reachable_count(),
        "compute_routes"
    );

    match ctx.cli.format {
        OutputFormat::Json => json::output_routes_json(&paths)?,
        OutputFormat::Human => human::output_routes_human(ctx.cli, &ctx.config, &paths),
    }

    Ok(())
}
