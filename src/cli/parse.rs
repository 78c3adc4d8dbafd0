//! Value parsers for CLI arguments

use rotas_core::format::OutputFormat;
use rotas_core::graph::Frontier;

pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

pub fn parse_frontier(s: &str) -> Result<Frontier, String> {
    s.parse::<Frontier>().map_err(|e| e.to_string())
}
