//! Built-in Brazilian intercity network

use crate::error::Result;
use crate::graph::{Graph, TravelTime};

/// (from, to, minutes, mode); every connection runs both ways
const CONNECTIONS: &[(&str, &str, u32, &str)] = &[
    ("São Paulo", "Rio de Janeiro", 360, "carro"),
    ("São Paulo", "Belo Horizonte", 480, "carro"),
    ("São Paulo", "Curitiba", 300, "carro"),
    ("São Paulo", "Brasília", 90, "avião"),
    ("Rio de Janeiro", "Belo Horizonte", 420, "carro"),
    ("Rio de Janeiro", "Vitória", 300, "carro"),
    ("Rio de Janeiro", "Salvador", 120, "avião"),
    ("Belo Horizonte", "Brasília", 360, "carro"),
    ("Curitiba", "Florianópolis", 180, "carro"),
    ("Curitiba", "Porto Alegre", 360, "ônibus"),
    ("Brasília", "Goiânia", 180, "carro"),
    ("Brasília", "Salvador", 90, "avião"),
    ("Salvador", "Recife", 240, "carro"),
    ("Recife", "Fortaleza", 360, "carro"),
    ("Fortaleza", "Manaus", 210, "avião"),
    ("Manaus", "Belém", 480, "barco"),
    ("Florianópolis", "Porto Alegre", 240, "carro"),
];

/// Fourteen state capitals and major cities linked by car, bus, plane and boat.
pub fn sample_network() -> Result<Graph<String>> {
    let mut graph = Graph::new();
    for &(from, to, minutes, mode) in CONNECTIONS {
        graph.add_bidirectional(
            from.to_string(),
            to.to_string(),
            TravelTime::from(minutes),
            mode,
        )?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_network_shape() {
        let graph = sample_network().unwrap();
        assert_eq!(graph.node_count(), 14);
        assert_eq!(graph.edge_count(), CONNECTIONS.len() * 2);
        assert!(graph.contains(&"Belém".to_string()));
    }
}
