//! Network loading
//!
//! Builds a [`Graph`] from a network file (TOML, JSON or YAML, chosen by
//! extension) or from the built-in sample network.

pub mod file;
pub mod sample;

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{Result, RotasError};
use crate::graph::Graph;

pub use file::{EdgeRecord, NetworkFile};
pub use sample::sample_network;

/// Supported network file extensions
pub const SUPPORTED_EXTENSIONS: &str = "toml, json, yaml, yml";

/// Parse network file content according to its extension.
pub fn parse_network(content: &str, extension: &str) -> Result<NetworkFile> {
    let file: NetworkFile = match extension.to_lowercase().as_str() {
        "toml" => toml::from_str(content)?,
        "json" => serde_json::from_str(content)?,
        "yaml" | "yml" => serde_yaml::from_str(content)?,
        other => crate::bail_unsupported!("network format", other, SUPPORTED_EXTENSIONS),
    };
    Ok(file)
}

/// Load a network file into a graph.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_network(path: &Path) -> Result<Graph<String>> {
    let start = Instant::now();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| RotasError::InvalidNetwork {
            path: path.to_path_buf(),
            reason: format!("missing file extension (expected one of: {SUPPORTED_EXTENSIONS})"),
        })?;

    let content = fs::read_to_string(path)?;
    let graph = parse_network(&content, extension)?.into_graph()?;

    crate::trace_time!(start, "load_network");
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "network_loaded"
    );

    Ok(graph)
}
