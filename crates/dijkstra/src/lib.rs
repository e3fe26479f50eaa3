mod calculator;
mod error;
pub mod generator;
pub mod graph;
pub mod sample;

pub use calculator::DistanceCalculator;
pub use calculator::Distances;
pub use calculator::Selection;
pub use error::ErrorKind;
pub use error::GraphError;
pub use graph::Edge;
pub use graph::Graph;
pub use graph::Node;
pub use graph::NodeId;

/// Distance reported for nodes the source cannot reach.
pub const INF: f64 = f64::INFINITY;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use crate::DistanceCalculator;
    use crate::ErrorKind;
    use crate::GraphError;
    use crate::INF;
    use crate::NodeId;
    use crate::Selection;
    use crate::generator::GraphCase;
    use crate::generator::generate_case;
    use crate::generator::node_name;
    use crate::graph::Graph;
    use crate::sample::demo_graph;

    const SELECTIONS: [Selection; 2] = [Selection::LinearScan, Selection::BinaryHeap];

    type Connection = (usize, usize, f64, bool);

    fn build(n: usize, connections: &[Connection]) -> Graph {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_node(node_name(i)).unwrap();
        }
        for &(u, v, w, both) in connections {
            g.add_connection(&node_name(u), &node_name(v), w, both).unwrap();
        }
        g
    }

    fn random_connections(n: usize, m: usize, rng: &mut StdRng) -> Vec<Connection> {
        let mut connections = Vec::with_capacity(m);
        while connections.len() < m {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u == v {
                continue;
            }
            let w = rng.random_range(1..=20_u32) as f64;
            connections.push((u, v, w, rng.random_bool(0.25)));
        }
        connections
    }

    /// Minimum weight over all simple paths from `source`, by exhaustive DFS.
    fn brute_force(graph: &Graph, source: usize) -> Vec<f64> {
        fn walk(graph: &Graph, u: usize, len: f64, on_path: &mut [bool], best: &mut [f64]) {
            best[u] = best[u].min(len);
            for edge in graph.out_edges(NodeId::from_index(u)) {
                let v = edge.to.index();
                if !on_path[v] {
                    on_path[v] = true;
                    walk(graph, v, len + edge.weight, on_path, best);
                    on_path[v] = false;
                }
            }
        }

        let n = graph.node_count();
        let mut best = vec![INF; n];
        let mut on_path = vec![false; n];
        on_path[source] = true;
        walk(graph, source, 0.0, &mut on_path, &mut best);
        best
    }

    fn solve(graph: &Graph, start: &str, selection: Selection) -> HashMap<String, f64> {
        DistanceCalculator::with_selection(selection)
            .calculate_distances(graph, start)
            .unwrap()
            .to_map()
    }

    #[test]
    fn indirect_path_beats_direct_edge() {
        let mut g = Graph::new();
        for name in ["A", "B", "C", "D"] {
            g.add_node(name).unwrap();
        }
        g.add_connection("A", "B", 1.0, true).unwrap();
        g.add_connection("B", "C", 2.0, true).unwrap();
        g.add_connection("A", "C", 5.0, false).unwrap();
        g.add_connection("C", "D", 1.0, false).unwrap();

        for selection in SELECTIONS {
            let d = DistanceCalculator::with_selection(selection)
                .calculate_distances(&g, "A")
                .unwrap();
            let got: Vec<_> = d.iter().collect();
            assert_eq!(got, vec![("A", 0.0), ("B", 1.0), ("C", 3.0), ("D", 4.0)]);
            assert_eq!(d.start(), "A");
        }

        let from_d = DistanceCalculator::new().calculate_distances(&g, "D").unwrap();
        assert_eq!(from_d.get("D"), Some(0.0));
        assert_eq!(from_d.reachable_count(), 1);
    }

    #[test]
    fn isolated_node_stays_infinite() {
        let mut g = Graph::new();
        for name in ["A", "B", "E"] {
            g.add_node(name).unwrap();
        }
        g.add_connection("A", "B", 3.0, false).unwrap();

        for selection in SELECTIONS {
            let d = DistanceCalculator::with_selection(selection)
                .calculate_distances(&g, "A")
                .unwrap();
            assert_eq!(d.get("E"), Some(INF));
            assert!(!d.is_reachable("E"));
            assert!(d.is_reachable("B"));
            assert_eq!(d.len(), 3);
        }
    }

    #[test]
    fn unknown_start_is_rejected() {
        let g = demo_graph().unwrap();
        let err = DistanceCalculator::new().calculate_distances(&g, "Q").unwrap_err();
        assert_eq!(err, GraphError::UnknownStart { name: "Q".into() });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let empty = Graph::new();
        let err = DistanceCalculator::with_selection(Selection::BinaryHeap)
            .calculate_distances(&empty, "A")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn demo_graph_from_a() {
        let g = demo_graph().unwrap();
        assert_eq!(g.node_count(), 11);
        assert_eq!(g.edge_count(), 30);

        let expected = [
            ("A", 0.0),
            ("B", 14.0),
            ("C", 10.0),
            ("D", 14.0),
            ("E", 21.0),
            ("F", 28.0),
            ("G", 24.0),
            ("H", 32.0),
            ("I", 33.0),
            ("J", 41.0),
            ("Z", INF),
        ];
        for selection in SELECTIONS {
            let d = DistanceCalculator::with_selection(selection)
                .calculate_distances(&g, "A")
                .unwrap();
            assert_eq!(d.iter().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let mut rng = StdRng::seed_from_u64(0xB2F0_0000);
        for round in 0..60 {
            let n = rng.random_range(2..=7);
            let m = rng.random_range(0..=n * 2);
            let connections = random_connections(n, m, &mut rng);
            let g = build(n, &connections);
            let source = rng.random_range(0..n);
            let expected = brute_force(&g, source);

            for selection in SELECTIONS {
                let d = DistanceCalculator::with_selection(selection)
                    .calculate_distances(&g, &node_name(source))
                    .unwrap();
                assert_eq!(d.as_slice(), expected.as_slice(), "round={round} {selection:?}");
                assert_eq!(d.get(&node_name(source)), Some(0.0));
            }
        }
    }

    #[test]
    fn connection_order_does_not_matter() {
        let mut rng = StdRng::seed_from_u64(0x0DE2_0000);
        for round in 0..20 {
            let n = 12;
            let mut connections = random_connections(n, 40, &mut rng);
            let before = solve(&build(n, &connections), "v0", Selection::LinearScan);
            connections.shuffle(&mut rng);
            let after = solve(&build(n, &connections), "v0", Selection::LinearScan);
            assert_eq!(before, after, "round={round}");
        }
    }

    #[test]
    fn bidirectional_equals_two_one_way_edges() {
        let mut rng = StdRng::seed_from_u64(0xB1D1_0000);
        for round in 0..20 {
            let n = 10;
            let connections = random_connections(n, 25, &mut rng);
            let split: Vec<Connection> = connections
                .iter()
                .flat_map(|&(u, v, w, both)| {
                    let mut out = vec![(u, v, w, false)];
                    if both {
                        out.push((v, u, w, false));
                    }
                    out
                })
                .collect();

            let a = build(n, &connections);
            let b = build(n, &split);
            assert_eq!(a.edge_count(), b.edge_count());
            for start in 0..n {
                let start = node_name(start);
                assert_eq!(
                    solve(&a, &start, Selection::LinearScan),
                    solve(&b, &start, Selection::LinearScan),
                    "round={round} start={start}"
                );
            }
        }
    }

    #[test]
    fn selections_agree_on_generated_cases() {
        for (i, case) in GraphCase::ALL.into_iter().enumerate() {
            let input = generate_case(case, 400, 0x5EED_0000 + i as u64).unwrap();
            let linear = DistanceCalculator::with_selection(Selection::LinearScan)
                .calculate_distances(&input.graph, &input.source)
                .unwrap();
            let heap = DistanceCalculator::with_selection(Selection::BinaryHeap)
                .calculate_distances(&input.graph, &input.source)
                .unwrap();
            assert_eq!(linear.as_slice(), heap.as_slice(), "case={}", case.label());
            assert_eq!(linear.get(&input.source), Some(0.0));
        }
    }

    #[test]
    fn disconnected_half_is_unreachable() {
        let input = generate_case(GraphCase::Disconnected, 100, 11).unwrap();
        let d = DistanceCalculator::new()
            .calculate_distances(&input.graph, &input.source)
            .unwrap();
        let half = input.graph.node_count() / 2;
        for (id, node) in input.graph.nodes().skip(half) {
            assert_eq!(d.distance(id), INF, "node={}", node.name());
        }
    }

    #[test]
    fn concurrent_calculations_share_one_graph() {
        let input = generate_case(GraphCase::SparseRandom, 300, 0xC0C0).unwrap();
        let graph = &input.graph;
        let starts: Vec<String> = (0..8).map(|i| node_name(i * 17)).collect();
        let sequential: Vec<_> = starts
            .iter()
            .map(|s| solve(graph, s, Selection::LinearScan))
            .collect();

        let concurrent: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = starts
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    scope.spawn(move || solve(graph, s, SELECTIONS[i % SELECTIONS.len()]))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(sequential, concurrent);
    }
}
