use super::RouteEntry;
use rotas_core::error::Result;
use rotas_core::format::ranked_destinations;
use rotas_core::graph::ShortestPaths;

/// Output in JSON format
pub fn output_routes_json(paths: &ShortestPaths<String>) -> Result<()> {
    let ranked = ranked_destinations(paths);
    let routes: Vec<RouteEntry<'_>> = ranked
        .iter()
        .map(|(destination, result)| RouteEntry::new(destination, result))
        .collect();

    let output = serde_json::json!({
        "origin": paths.origin(),
        "routes": routes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
