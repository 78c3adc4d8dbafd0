//! Property checks for the routing engine on seeded random networks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rotas_core::graph::{Frontier, Graph, ShortestPathEngine, ShortestPaths, TravelTime};

const MODES: [&str; 6] = ["carro", "trem", "ônibus", "barco", "avião", "bicicleta"];

fn random_graph(rng: &mut StdRng, nodes: usize, edge_probability: f64) -> Graph<usize> {
    let mut graph = Graph::new();
    for id in 0..nodes {
        graph.add_node(id);
    }
    for from in 0..nodes {
        for to in 0..nodes {
            if rng.random_bool(edge_probability) {
                let minutes = rng.random_range(0..=30u32);
                let mode = MODES[rng.random_range(0..MODES.len())];
                graph
                    .add_edge(from, to, TravelTime::from(minutes), mode)
                    .unwrap();
            }
        }
    }
    graph
}

/// Minimum over every simple path from `origin`, by exhaustive search.
fn brute_force(graph: &Graph<usize>, origin: usize) -> Vec<Option<f64>> {
    fn walk(
        graph: &Graph<usize>,
        node: usize,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<f64>>,
    ) {
        match best[node] {
            Some(known) if known <= cost => {}
            _ => best[node] = Some(cost),
        }
        for edge in graph.outbound_edges(node) {
            if !on_path[edge.to] {
                on_path[edge.to] = true;
                walk(graph, edge.to, cost + edge.weight.minutes(), on_path, best);
                on_path[edge.to] = false;
            }
        }
    }

    let mut best = vec![None; graph.node_count()];
    let mut on_path = vec![false; graph.node_count()];
    on_path[origin] = true;
    walk(graph, origin, 0.0, &mut on_path, &mut best);
    best
}

fn check_consistency(graph: &Graph<usize>, paths: &ShortestPaths<usize>, origin: usize) {
    for (&node, result) in paths.iter() {
        if !result.is_reachable() {
            assert!(result.path.is_empty(), "stale path for {node}");
            assert!(result.modes.is_empty(), "stale modes for {node}");
            continue;
        }

        assert_eq!(result.path.len() - 1, result.modes.len());
        assert_eq!(result.path.first(), Some(&origin));
        assert_eq!(result.path.last(), Some(&node));

        if node != origin {
            let pred = result.path[result.path.len() - 2];
            let mode = result.modes.last().unwrap();
            let pred_distance = paths.distance(&pred).unwrap();
            let pred_ix = graph.node_index(&pred).unwrap();
            let node_ix = graph.node_index(&node).unwrap();
            assert!(
                graph.outbound_edges(pred_ix).iter().any(|edge| edge.to == node_ix
                    && &edge.mode == mode
                    && pred_distance + edge.weight == result.distance),
                "no edge {pred} -> {node} explains distance {}",
                result.distance
            );
        }
    }
}

#[test]
fn distances_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let nodes = rng.random_range(1..=7);
        let graph = random_graph(&mut rng, nodes, 0.35);
        let origin = rng.random_range(0..nodes);

        let expected = brute_force(&graph, origin);
        for frontier in [Frontier::Heap, Frontier::Scan] {
            let paths = ShortestPathEngine::with_frontier(frontier)
                .compute(&graph, &origin)
                .unwrap();

            for node in 0..nodes {
                let actual = paths.distance(&node).unwrap();
                match expected[node] {
                    Some(minutes) => assert_eq!(actual.minutes(), minutes),
                    None => assert!(!actual.is_finite()),
                }
            }
            check_consistency(&graph, &paths, origin);
        }
    }
}

#[test]
fn heap_and_scan_produce_identical_results() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let nodes = rng.random_range(1..=25);
        let graph = random_graph(&mut rng, nodes, 0.15);
        let origin = rng.random_range(0..nodes);

        let heap = ShortestPathEngine::with_frontier(Frontier::Heap)
            .compute(&graph, &origin)
            .unwrap();
        let scan = ShortestPathEngine::with_frontier(Frontier::Scan)
            .compute(&graph, &origin)
            .unwrap();
        assert_eq!(heap, scan);
    }
}

#[test]
fn adding_an_edge_never_increases_distances() {
    let mut rng = StdRng::seed_from_u64(7);
    let engine = ShortestPathEngine::new();
    for _ in 0..100 {
        let nodes = rng.random_range(2..=12);
        let mut graph = random_graph(&mut rng, nodes, 0.2);
        let origin = rng.random_range(0..nodes);
        let before = engine.compute(&graph, &origin).unwrap();

        let from = rng.random_range(0..nodes);
        let to = rng.random_range(0..nodes);
        let minutes = rng.random_range(0..=30u32);
        graph
            .add_edge(from, to, TravelTime::from(minutes), "trem")
            .unwrap();
        let after = engine.compute(&graph, &origin).unwrap();

        for node in 0..nodes {
            let old = before.distance(&node).unwrap();
            let new = after.distance(&node).unwrap();
            assert!(new <= old, "{node}: {new} > {old} after adding {from} -> {to}");
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_graph(&mut rng, 30, 0.1);
    let engine = ShortestPathEngine::new();
    for origin in 0..30 {
        assert_eq!(
            engine.compute(&graph, &origin).unwrap(),
            engine.compute(&graph, &origin).unwrap()
        );
    }
}

#[test]
fn shared_graph_across_threads() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_graph(&mut rng, 20, 0.2);
    let expected = ShortestPathEngine::new().compute(&graph, &0).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ShortestPathEngine::new().compute(&graph, &0).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
