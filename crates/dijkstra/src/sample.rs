use crate::error::GraphError;
use crate::graph::Graph;

pub const DEMO_NODES: [&str; 11] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "Z"];

/// `(from, to, weight, bidirectional)`
pub const DEMO_CONNECTIONS: [(&str, &str, f64, bool); 17] = [
    ("A", "B", 14.0, true),
    ("A", "C", 10.0, true),
    ("A", "D", 14.0, true),
    ("A", "E", 21.0, true),
    ("B", "C", 9.0, true),
    ("B", "E", 10.0, true),
    ("B", "F", 14.0, true),
    ("C", "D", 9.0, false),
    ("D", "G", 10.0, false),
    ("E", "H", 11.0, true),
    ("F", "C", 10.0, false),
    ("F", "H", 10.0, true),
    ("F", "I", 9.0, true),
    ("G", "F", 8.0, false),
    ("G", "I", 9.0, true),
    ("H", "J", 9.0, true),
    ("I", "J", 10.0, true),
];

/// The fixed demonstration graph. `Z` has no connections.
pub fn demo_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::with_capacity(DEMO_NODES.len());
    for name in DEMO_NODES {
        graph.add_node(name)?;
    }
    for (from, to, weight, bidirectional) in DEMO_CONNECTIONS {
        graph.add_connection(from, to, weight, bidirectional)?;
    }
    Ok(graph)
}
