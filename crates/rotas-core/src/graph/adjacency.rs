//! Arena-backed adjacency graph
//!
//! Nodes receive a stable integer index on first sight, in insertion order.
//! Outgoing edges keep the order in which they were added, which fixes the
//! relaxation order and therefore the tie-break between equal-cost routes.

use std::collections::HashMap;

use crate::error::{Result, RotasError};
use crate::graph::types::{Edge, NodeId, TransportMode, TravelTime};

/// Directed, weighted transportation network.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, returning its index. Existing nodes keep their index.
    pub fn add_node(&mut self, id: N) -> usize {
        if let Some(&ix) = self.index.get(&id) {
            return ix;
        }
        let ix = self.nodes.len();
        self.index.insert(id.clone(), ix);
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        ix
    }

    /// Add a directed edge. Unknown endpoints are registered on the fly.
    ///
    /// Weights must be finite and non-negative. NaN and infinite weights are
    /// rejected with [`RotasError::NonFiniteWeight`], negative ones with
    /// [`RotasError::NegativeWeight`], before the graph is touched.
    pub fn add_edge(
        &mut self,
        from: N,
        to: N,
        weight: TravelTime,
        mode: impl Into<TransportMode>,
    ) -> Result<()> {
        if !weight.is_finite() {
            return Err(RotasError::NonFiniteWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: weight.minutes(),
            });
        }
        if !weight.is_valid_weight() {
            return Err(RotasError::NegativeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: weight.minutes(),
            });
        }
        let from_ix = self.add_node(from);
        let to_ix = self.add_node(to);
        self.adjacency[from_ix].push(Edge {
            to: to_ix,
            weight,
            mode: mode.into(),
        });
        Ok(())
    }

    /// Add the same connection in both directions.
    pub fn add_bidirectional(
        &mut self,
        a: N,
        b: N,
        weight: TravelTime,
        mode: impl Into<TransportMode>,
    ) -> Result<()> {
        let mode = mode.into();
        self.add_edge(a.clone(), b.clone(), weight, mode.clone())?;
        self.add_edge(b, a, weight, mode)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_index(&self, id: &N) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn node(&self, ix: usize) -> &N {
        &self.nodes[ix]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn outbound_edges(&self, ix: usize) -> &[Edge] {
        &self.adjacency[ix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph: Graph<String> = Graph::new();
        let a = graph.add_node("A".to_string());
        let again = graph.add_node("A".to_string());
        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_registers_target_only_nodes() {
        let mut graph = Graph::new();
        graph
            .add_edge("Brasília", "Goiânia", TravelTime::from(180), "carro")
            .unwrap();

        assert!(graph.contains(&"Goiânia"));
        let goiania = graph.node_index(&"Goiânia").unwrap();
        assert!(graph.outbound_edges(goiania).is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_rejects_negative_weight() {
        let mut graph = Graph::new();
        let err = graph
            .add_edge("A", "B", TravelTime::new(-1.0), "carro")
            .unwrap_err();

        assert!(matches!(err, RotasError::NegativeWeight { .. }));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_edge_rejects_non_finite_weight() {
        let mut graph = Graph::new();
        for weight in [f64::NAN, f64::INFINITY] {
            let err = graph
                .add_edge("A", "B", TravelTime::new(weight), "carro")
                .unwrap_err();
            assert!(matches!(err, RotasError::NonFiniteWeight { .. }));
        }
        assert!(graph.is_empty());
    }

    #[test]
    fn test_bidirectional_adds_both_directions() {
        let mut graph = Graph::new();
        graph
            .add_bidirectional("São Paulo", "Brasília", TravelTime::from(90), "avião")
            .unwrap();

        assert_eq!(graph.edge_count(), 2);
        let sp = graph.node_index(&"São Paulo").unwrap();
        let bsb = graph.node_index(&"Brasília").unwrap();
        assert_eq!(graph.outbound_edges(sp)[0].to, bsb);
        assert_eq!(graph.outbound_edges(bsb)[0].to, sp);
        assert_eq!(graph.outbound_edges(bsb)[0].mode, TransportMode::Plane);
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge(1, 3, TravelTime::from(5), "trem").unwrap();
        graph.add_edge(1, 2, TravelTime::from(5), "trem").unwrap();

        let targets: Vec<i32> = graph
            .outbound_edges(0)
            .iter()
            .map(|e| *graph.node(e.to))
            .collect();
        assert_eq!(targets, vec![3, 2]);
    }
}
