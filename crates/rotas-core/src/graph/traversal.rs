use crate::graph::adjacency::Graph;
use crate::graph::types::{Edge, NodeId};

/// Trait for providing graph adjacency to the routing algorithms
///
/// Nodes are addressed by dense indices `0..node_count()`.
pub trait GraphProvider<N: NodeId> {
    fn node_count(&self) -> usize;
    fn node_index(&self, id: &N) -> Option<usize>;
    fn node(&self, ix: usize) -> &N;
    fn outbound_edges(&self, ix: usize) -> &[Edge];
}

impl<N: NodeId> GraphProvider<N> for Graph<N> {
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn node_index(&self, id: &N) -> Option<usize> {
        Graph::node_index(self, id)
    }

    fn node(&self, ix: usize) -> &N {
        Graph::node(self, ix)
    }

    fn outbound_edges(&self, ix: usize) -> &[Edge] {
        Graph::outbound_edges(self, ix)
    }
}
