//! Graph algorithm implementations
//!
//! - `dijkstra`: single-origin shortest travel times with heap or scan frontier
//! - `shared`: working state used by both frontier strategies

pub mod dijkstra;
pub(crate) mod shared;

pub use dijkstra::{shortest_paths, HeapEntry, ShortestPathEngine};
