use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Identifier of a vertex in the network.
///
/// Any cloneable, hashable, displayable key works; city names (`String`)
/// are the usual choice.
pub trait NodeId: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> NodeId for T {}

/// Travel time in minutes.
///
/// `TravelTime::INFINITY` marks a destination that cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelTime(f64);

impl TravelTime {
    pub const ZERO: TravelTime = TravelTime(0.0);
    pub const INFINITY: TravelTime = TravelTime(f64::INFINITY);

    pub fn new(minutes: f64) -> Self {
        TravelTime(minutes)
    }

    pub fn minutes(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Valid edge weights are finite and non-negative (rejects NaN).
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Sum of two travel times, clamped to `f64::MAX` when two finite
    /// values overflow. Infinite operands stay infinite.
    pub fn saturating_add(self, other: Self) -> Self {
        let sum = self.0 + other.0;
        if sum.is_infinite() && self.is_finite() && other.is_finite() {
            TravelTime(f64::MAX)
        } else {
            TravelTime(sum)
        }
    }

    /// Total ordering over travel times, used for frontier selection.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for TravelTime {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for TravelTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        TravelTime(self.0 + other.0)
    }
}

impl From<u32> for TravelTime {
    fn from(minutes: u32) -> Self {
        TravelTime(minutes as f64)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}min", self.0)
        } else {
            write!(f, "unreachable")
        }
    }
}

/// Transport method used on an edge.
///
/// Known labels get their own variant; anything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    Car,
    Train,
    Bus,
    Boat,
    Plane,
    Other(String),
}

impl TransportMode {
    pub fn as_str(&self) -> &str {
        match self {
            TransportMode::Car => "carro",
            TransportMode::Train => "trem",
            TransportMode::Bus => "ônibus",
            TransportMode::Boat => "barco",
            TransportMode::Plane => "avião",
            TransportMode::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TransportMode::Other(_))
    }
}

impl From<&str> for TransportMode {
    fn from(label: &str) -> Self {
        match label {
            "carro" => TransportMode::Car,
            "trem" => TransportMode::Train,
            "ônibus" => TransportMode::Bus,
            "barco" => TransportMode::Boat,
            "avião" => TransportMode::Plane,
            other => TransportMode::Other(other.to_string()),
        }
    }
}

impl From<String> for TransportMode {
    fn from(label: String) -> Self {
        TransportMode::from(label.as_str())
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TransportMode::from(s))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frontier selection strategy for the shortest-path engine
///
/// Both strategies settle nodes in the same order and produce identical
/// results; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontier {
    /// Binary heap with lazy deletion, O((V+E) log V)
    #[default]
    Heap,
    /// Rescan of every unsettled node, O(V²)
    Scan,
}

impl std::str::FromStr for Frontier {
    type Err = crate::error::RotasError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heap" => Ok(Frontier::Heap),
            "scan" => Ok(Frontier::Scan),
            other => crate::bail_invalid!("frontier (expected: heap, scan)", other),
        }
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frontier::Heap => write!(f, "heap"),
            Frontier::Scan => write!(f, "scan"),
        }
    }
}

/// Directed edge stored in the adjacency list of its source node.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Arena index of the target node
    pub to: usize,
    pub weight: TravelTime,
    pub mode: TransportMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_time_addition() {
        let sum = TravelTime::from(90) + TravelTime::new(30.5);
        assert_eq!(sum.minutes(), 120.5);
    }

    #[test]
    fn test_travel_time_infinity_absorbs() {
        let sum = TravelTime::INFINITY + TravelTime::from(10);
        assert!(!sum.is_finite());
        assert_eq!(TravelTime::INFINITY.to_string(), "unreachable");
    }

    #[test]
    fn test_travel_time_saturating_add() {
        let max = TravelTime::new(f64::MAX);
        assert_eq!(max.saturating_add(max), max);
        assert_eq!(
            TravelTime::from(90).saturating_add(TravelTime::from(30)),
            TravelTime::from(120)
        );
        assert!(!TravelTime::INFINITY
            .saturating_add(TravelTime::ZERO)
            .is_finite());
    }

    #[test]
    fn test_travel_time_weight_validation() {
        assert!(TravelTime::ZERO.is_valid_weight());
        assert!(TravelTime::from(360).is_valid_weight());
        assert!(!TravelTime::new(-1.0).is_valid_weight());
        assert!(!TravelTime::new(f64::NAN).is_valid_weight());
        assert!(!TravelTime::INFINITY.is_valid_weight());
    }

    #[test]
    fn test_travel_time_total_cmp_orders_infinity_last() {
        assert_eq!(
            TravelTime::from(5).total_cmp(&TravelTime::INFINITY),
            Ordering::Less
        );
        assert_eq!(
            TravelTime::from(5).total_cmp(&TravelTime::from(5)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_transport_mode_known_labels() {
        assert_eq!(TransportMode::from("avião"), TransportMode::Plane);
        assert_eq!(TransportMode::from("ônibus"), TransportMode::Bus);
        assert!(TransportMode::Car.is_known());
    }

    #[test]
    fn test_transport_mode_unknown_label_verbatim() {
        let mode = TransportMode::from("teleférico");
        assert_eq!(mode, TransportMode::Other("teleférico".to_string()));
        assert!(!mode.is_known());
        assert_eq!(mode.to_string(), "teleférico");
    }

    #[test]
    fn test_frontier_from_str() {
        assert_eq!("heap".parse::<Frontier>().unwrap(), Frontier::Heap);
        assert_eq!("SCAN".parse::<Frontier>().unwrap(), Frontier::Scan);
        assert!("fibonacci".parse::<Frontier>().is_err());
        assert_eq!(Frontier::default(), Frontier::Heap);
    }

    #[test]
    fn test_transport_mode_serde_as_label() {
        let json = serde_json::to_string(&TransportMode::Boat).unwrap();
        assert_eq!(json, "\"barco\"");
        let mode: TransportMode = serde_json::from_str("\"bicicleta\"").unwrap();
        assert_eq!(mode.as_str(), "bicicleta");
    }
}
