//! Output format handling for rotas
//!
//! Supports two output formats:
//! - human: aligned table for terminal use
//! - json: stable, machine-readable JSON
//!
//! Also holds the presentation rules shared by both: destination ordering,
//! duration rendering and transport mode glyphs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RotasConfig;
use crate::error::RotasError;
use crate::graph::{NodeId, PathResult, ShortestPaths, TransportMode, TravelTime};

/// Output format for rotas commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RotasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RotasError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a travel time as `Xh Ymin`, or `Ymin` under an hour.
///
/// Fractional minutes are truncated.
pub fn format_duration(time: TravelTime) -> String {
    if !time.is_finite() {
        return "unreachable".to_string();
    }
    let total = time.minutes().max(0.0) as u64;
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{}h {}min", hours, minutes)
    } else {
        format!("{}min", minutes)
    }
}

/// Built-in glyph for a known transport mode
pub fn default_glyph(mode: &TransportMode) -> Option<&'static str> {
    match mode {
        TransportMode::Car => Some("🚗"),
        TransportMode::Train => Some("🚄"),
        TransportMode::Bus => Some("🚌"),
        TransportMode::Boat => Some("⛵"),
        TransportMode::Plane => Some("✈️"),
        TransportMode::Other(_) => None,
    }
}

/// Display form of a mode: configured glyph, built-in glyph, or the label
/// itself for unrecognised modes.
pub fn render_mode(mode: &TransportMode, config: &RotasConfig) -> String {
    config
        .glyph_for(mode.as_str())
        .or_else(|| default_glyph(mode))
        .unwrap_or(mode.as_str())
        .to_string()
}

/// Destinations ordered for display: origin omitted, ascending travel time,
/// unreachable last. Ties keep graph order.
pub fn ranked_destinations<N: NodeId>(paths: &ShortestPaths<N>) -> Vec<(&N, PathResult<N>)> {
    let origin = paths.origin();
    let mut ranked: Vec<(&N, PathResult<N>)> =
        paths.iter().filter(|(id, _)| *id != origin).collect();

    ranked.sort_by(|(_, a), (_, b)| {
        b.is_reachable()
            .cmp(&a.is_reachable())
            .then_with(|| a.distance.total_cmp(&b.distance))
    });
    ranked
}
