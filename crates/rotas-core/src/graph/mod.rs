//! Transportation graph and routing
//!
//! Provides the network representation and the routing algorithm:
//! - `adjacency`: arena-backed directed graph with travel-time edges
//! - `algos`: single-origin shortest-path engine
//! - `paths`: result set and lazy path reconstruction
//! - `traversal`: provider trait consumed by the algorithms

pub mod adjacency;
pub mod algos;
pub mod paths;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::{shortest_paths, ShortestPathEngine};
pub use paths::{PathResult, ShortestPaths};
pub use traversal::GraphProvider;
pub use types::{Edge, Frontier, NodeId, TransportMode, TravelTime};
