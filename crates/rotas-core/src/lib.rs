//! Rotas Core Library
//!
//! Shortest travel-time routing over multimodal transportation networks:
//! graph representation, the single-origin routing engine, network loading,
//! configuration and presentation helpers.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
