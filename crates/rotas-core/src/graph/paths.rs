//! Shortest-path result set and path reconstruction

use std::collections::HashMap;

use serde::Serialize;

use crate::graph::types::{NodeId, TransportMode, TravelTime};

/// Back-pointer recorded when a node's tentative distance improves.
#[derive(Debug, Clone, PartialEq)]
pub struct Predecessor {
    pub node: usize,
    pub mode: TransportMode,
}

/// Route to a single destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    /// Cumulative travel time; `TravelTime::INFINITY` when unreachable
    pub distance: TravelTime,
    /// Nodes from origin to destination inclusive, empty when unreachable
    pub path: Vec<N>,
    /// One mode per traversed edge
    pub modes: Vec<TransportMode>,
}

impl<N> PathResult<N> {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    fn unreachable() -> Self {
        Self {
            distance: TravelTime::INFINITY,
            path: Vec::new(),
            modes: Vec::new(),
        }
    }
}

/// Output of a single-origin computation: one entry per graph node.
///
/// Only distances and back-pointers are stored; full paths are rebuilt on
/// request by walking predecessors back to the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<N: NodeId> {
    origin: usize,
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    distances: Vec<TravelTime>,
    predecessors: Vec<Option<Predecessor>>,
}

impl<N: NodeId> ShortestPaths<N> {
    pub(crate) fn new(
        origin: usize,
        nodes: Vec<N>,
        distances: Vec<TravelTime>,
        predecessors: Vec<Option<Predecessor>>,
    ) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(ix, id)| (id.clone(), ix))
            .collect();
        Self {
            origin,
            nodes,
            index,
            distances,
            predecessors,
        }
    }

    pub fn origin(&self) -> &N {
        &self.nodes[self.origin]
    }

    /// Number of nodes covered (reachable or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    pub fn distance(&self, id: &N) -> Option<TravelTime> {
        self.index.get(id).map(|&ix| self.distances[ix])
    }

    /// Route to `id`, or `None` if the node is not part of the graph.
    pub fn get(&self, id: &N) -> Option<PathResult<N>> {
        self.index.get(id).map(|&ix| self.result_at(ix))
    }

    /// All routes in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, PathResult<N>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(move |(ix, id)| (id, self.result_at(ix)))
    }

    pub fn into_map(self) -> HashMap<N, PathResult<N>> {
        (0..self.nodes.len())
            .map(|ix| (self.nodes[ix].clone(), self.result_at(ix)))
            .collect()
    }

    fn result_at(&self, ix: usize) -> PathResult<N> {
        let distance = self.distances[ix];
        if !distance.is_finite() {
            return PathResult::unreachable();
        }

        let mut path = vec![self.nodes[ix].clone()];
        let mut modes = Vec::new();
        let mut current = ix;

        // Predecessor chains are acyclic; the step bound only guards the loop.
        for _ in 0..self.nodes.len() {
            if current == self.origin {
                break;
            }
            match &self.predecessors[current] {
                Some(pred) => {
                    modes.push(pred.mode.clone());
                    current = pred.node;
                    path.push(self.nodes[current].clone());
                }
                None => break,
            }
        }

        path.reverse();
        modes.reverse();

        PathResult {
            distance,
            path,
            modes,
        }
    }
}
