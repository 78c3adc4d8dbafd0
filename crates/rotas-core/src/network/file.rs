//! On-disk network description

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Graph, TransportMode, TravelTime};

/// Serialized network, shared by the TOML, JSON and YAML loaders.
///
/// ```toml
/// nodes = ["Vitória"]
///
/// [[edges]]
/// from = "São Paulo"
/// to = "Brasília"
/// minutes = 90
/// mode = "avião"
/// bidirectional = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Nodes declared explicitly, e.g. stations without connections yet
    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One connection in a network file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub minutes: f64,
    pub mode: TransportMode,
    /// Also declare the reverse edge with the same travel time
    #[serde(default)]
    pub bidirectional: bool,
}

impl NetworkFile {
    /// Build the graph. Declared nodes come first, in file order, followed by
    /// edge endpoints in order of appearance.
    pub fn into_graph(self) -> Result<Graph<String>> {
        let mut graph = Graph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for edge in self.edges {
            let weight = TravelTime::new(edge.minutes);
            if edge.bidirectional {
                graph.add_bidirectional(edge.from, edge.to, weight, edge.mode)?;
            } else {
                graph.add_edge(edge.from, edge.to, weight, edge.mode)?;
            }
        }
        Ok(graph)
    }
}
