//! Working state shared by both frontier strategies

use crate::graph::paths::{Predecessor, ShortestPaths};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, NodeId, TravelTime};

/// Per-query tentative state, indexed by node arena index.
pub(crate) struct SearchState {
    pub distances: Vec<TravelTime>,
    pub predecessors: Vec<Option<Predecessor>>,
    pub settled: Vec<bool>,
    pub settled_count: usize,
    pub relaxations: usize,
}

impl SearchState {
    pub fn new(node_count: usize, origin: usize) -> Self {
        let mut distances = vec![TravelTime::INFINITY; node_count];
        distances[origin] = TravelTime::ZERO;
        Self {
            distances,
            predecessors: vec![None; node_count],
            settled: vec![false; node_count],
            settled_count: 0,
            relaxations: 0,
        }
    }

    pub fn settle(&mut self, ix: usize) {
        self.settled[ix] = true;
        self.settled_count += 1;
    }

    /// Relax one edge out of the settled node `from`.
    ///
    /// Only a strictly shorter candidate replaces the current route, so on
    /// ties the route through the earlier-settled node stays. Candidates
    /// saturate at `f64::MAX`, keeping every reachable node finite.
    /// Returns the improved distance of the target, if any.
    pub fn relax(&mut self, from: usize, edge: &Edge) -> Option<TravelTime> {
        let candidate = self.distances[from].saturating_add(edge.weight);
        if candidate < self.distances[edge.to] {
            self.distances[edge.to] = candidate;
            self.predecessors[edge.to] = Some(Predecessor {
                node: from,
                mode: edge.mode.clone(),
            });
            self.relaxations += 1;
            Some(candidate)
        } else {
            None
        }
    }

    pub fn into_result<N: NodeId, G: GraphProvider<N> + ?Sized>(
        self,
        graph: &G,
        origin: usize,
    ) -> ShortestPaths<N> {
        let nodes = (0..graph.node_count())
            .map(|ix| graph.node(ix).clone())
            .collect();
        ShortestPaths::new(origin, nodes, self.distances, self.predecessors)
    }
}
