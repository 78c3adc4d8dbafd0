use crate::error::{Result, RotasError};
use crate::graph::adjacency::Graph;
use crate::graph::algos::shared::SearchState;
use crate::graph::paths::ShortestPaths;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Frontier, NodeId, TravelTime};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance,
/// then node index)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: usize,
    pub distance: TravelTime,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Single-origin shortest travel-time engine
///
/// Weights are non-negative (enforced by [`Graph::add_edge`]), so a settled
/// node is never revisited. Nodes settle in order of tentative distance with
/// ties going to the lower node index, and edges relax in insertion order,
/// which makes every result reproducible across runs and strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathEngine {
    frontier: Frontier,
}

impl ShortestPathEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontier(frontier: Frontier) -> Self {
        Self { frontier }
    }

    pub fn frontier(&self) -> Frontier {
        self.frontier
    }

    /// Compute routes from `origin` to every node of `graph`.
    ///
    /// An empty graph yields a result holding only the origin. Otherwise the
    /// origin must be a node of the graph.
    #[tracing::instrument(skip_all, fields(origin = %origin, frontier = %self.frontier, nodes = graph.node_count()))]
    pub fn compute<N, G>(&self, graph: &G, origin: &N) -> Result<ShortestPaths<N>>
    where
        N: NodeId,
        G: GraphProvider<N> + ?Sized,
    {
        if graph.node_count() == 0 {
            return Ok(ShortestPaths::new(
                0,
                vec![origin.clone()],
                vec![TravelTime::ZERO],
                vec![None],
            ));
        }

        let origin_ix = graph
            .node_index(origin)
            .ok_or_else(|| RotasError::unknown_origin(origin))?;

        let mut state = SearchState::new(graph.node_count(), origin_ix);
        match self.frontier {
            Frontier::Heap => run_heap::<N, G>(graph, origin_ix, &mut state),
            Frontier::Scan => run_scan::<N, G>(graph, &mut state),
        }

        tracing::debug!(
            settled = state.settled_count,
            relaxations = state.relaxations,
            "shortest_paths_complete"
        );

        Ok(state.into_result(graph, origin_ix))
    }
}

/// Compute routes with the default engine.
pub fn shortest_paths<N: NodeId>(graph: &Graph<N>, origin: &N) -> Result<ShortestPaths<N>> {
    ShortestPathEngine::new().compute(graph, origin)
}

fn run_heap<N, G>(graph: &G, origin: usize, state: &mut SearchState)
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
{
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: origin,
        distance: TravelTime::ZERO,
    }));

    // Only finite distances are ever pushed, so an empty heap means every
    // remaining node is unreachable.
    while let Some(Reverse(HeapEntry { node, distance })) = heap.pop() {
        // Lazy deletion of stale entries
        if state.settled[node] || distance > state.distances[node] {
            continue;
        }

        state.settle(node);
        tracing::trace!(node = %graph.node(node), distance = distance.minutes(), "settled");

        for edge in graph.outbound_edges(node) {
            if let Some(improved) = state.relax(node, edge) {
                heap.push(Reverse(HeapEntry {
                    node: edge.to,
                    distance: improved,
                }));
            }
        }
    }
}

fn run_scan<N, G>(graph: &G, state: &mut SearchState)
where
    N: NodeId,
    G: GraphProvider<N> + ?Sized,
{
    loop {
        let next = (0..graph.node_count())
            .filter(|&ix| !state.settled[ix])
            .min_by(|&a, &b| {
                state.distances[a]
                    .total_cmp(&state.distances[b])
                    .then_with(|| a.cmp(&b))
            });

        let node = match next {
            Some(ix) if state.distances[ix].is_finite() => ix,
            // Frontier exhausted, or only unreachable nodes remain
            _ => break,
        };

        state.settle(node);
        tracing::trace!(node = %graph.node(node), distance = state.distances[node].minutes(), "settled");

        for edge in graph.outbound_edges(node) {
            state.relax(node, edge);
        }
    }
}
