//! Nodes command: list the cities of the network

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use rotas_core::error::Result;

/// Execute the nodes command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(ix, name)| {
                    serde_json::json!({
                        "name": name,
                        "outbound": graph.outbound_edges(ix).len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        OutputFormat::Human => {
            for (ix, name) in graph.nodes().iter().enumerate() {
                let outbound = graph.outbound_edges(ix).len();
                if ctx.cli.quiet {
                    println!("{}", name);
                } else {
                    println!(
                        "{} ({} {})",
                        name,
                        outbound,
                        if outbound == 1 { "connection" } else { "connections" }
                    );
                }
            }
        }
    }

    Ok(())
}
