//! CLI argument parsing for rotas
//!
//! Uses clap for argument parsing.
//! Supports global flags: --network, --config, --frontier, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_format, parse_frontier};
use rotas_core::graph::Frontier;

pub use rotas_core::format::OutputFormat;

/// Rotas - fastest travel routes across a multimodal transportation network
#[derive(Parser, Debug)]
#[command(name = "rotas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network file (TOML, JSON or YAML); defaults to the built-in sample network
    #[arg(long, global = true, env = "ROTAS_NETWORK")]
    pub network: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/rotas/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Frontier strategy: heap or scan (overrides configuration)
    #[arg(long, global = true, value_parser = parse_frontier)]
    pub frontier: Option<Frontier>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, rotas_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the fastest route from an origin to every destination
    Routes {
        /// Origin city
        origin: String,
    },

    /// Show the fastest route between two cities
    Path {
        /// Origin city
        origin: String,

        /// Destination city
        destination: String,
    },

    /// List the cities of the network
    Nodes,
}
