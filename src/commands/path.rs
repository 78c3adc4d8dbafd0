//! Path command: fastest route between two cities

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::routes::human::{render_modes, render_path};
use crate::commands::routes::RouteEntry;
use rotas_core::error::{Result, RotasError};
use rotas_core::format::format_duration;

/// Execute the path command
pub fn execute(ctx: &CommandContext, origin: &str, destination: &str) -> Result<()> {
    let graph = ctx.load_graph()?;
    let paths = ctx.engine().compute(&graph, &origin.to_string())?;

    let result = paths
        .get(&destination.to_string())
        .ok_or_else(|| RotasError::unknown_node(destination))?;

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        reachable = result.is_reachable(),
        "compute_path"
    );

    match ctx.cli.format {
        OutputFormat::Json => {
            let entry = RouteEntry::new(destination, &result);
            let output = serde_json::json!({
                "origin": paths.origin(),
                "destination": entry.destination,
                "minutes": entry.minutes,
                "reachable": entry.reachable,
                "path": entry.path,
                "modes": entry.modes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !result.is_reachable() {
                println!("No route from {} to {}", origin, destination);
                return Ok(());
            }

            println!("{}", render_path(&result.path, &ctx.config));
            if !ctx.cli.quiet {
                println!("Time: {}", format_duration(result.distance));
                if !result.modes.is_empty() {
                    println!("Modes: {}", render_modes(&result.modes, &ctx.config));
                }
                let legs = result.modes.len();
                println!(
                    "Path length: {} {}",
                    legs,
                    if legs == 1 { "leg" } else { "legs" }
                );
            }
        }
    }

    Ok(())
}
