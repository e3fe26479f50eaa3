use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use tracing::debug;
use tracing::trace;

use crate::INF;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::graph::NodeId;

/// How the next node to settle is chosen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Selection {
    /// Scan every unsettled node on each step. O(V^2).
    #[default]
    LinearScan,
    /// Lazy-deletion binary heap keyed by tentative distance. O((V + E) log V).
    BinaryHeap,
}

impl Selection {
    pub fn label(self) -> &'static str {
        match self {
            Self::LinearScan => "linear_scan",
            Self::BinaryHeap => "binary_heap",
        }
    }
}

/// Single-source shortest distances over a [`Graph`].
///
/// The calculator holds no working state; every call owns its own distance
/// vector and settled set, so one graph may be solved from several threads
/// at once.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceCalculator {
    selection: Selection,
}

impl DistanceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: Selection) -> Self {
        Self { selection }
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn calculate_distances<'g>(
        &self,
        graph: &'g Graph,
        start: &str,
    ) -> Result<Distances<'g>, GraphError> {
        let source = graph.node_id(start).ok_or_else(|| GraphError::UnknownStart {
            name: start.to_owned(),
        })?;

        debug!(
            start,
            nodes = graph.node_count(),
            selection = self.selection.label(),
            "calculating distances"
        );
        let dist = match self.selection {
            Selection::LinearScan => linear_scan(graph, source),
            Selection::BinaryHeap => binary_heap(graph, source),
        };

        let distances = Distances {
            graph,
            source,
            dist,
        };
        debug!(start, reached = distances.reachable_count(), "distances calculated");
        Ok(distances)
    }
}

fn linear_scan(graph: &Graph, source: NodeId) -> Vec<f64> {
    let n = graph.node_count();
    let mut dist = vec![INF; n];
    let mut settled = vec![false; n];
    dist[source.index()] = 0.0;

    while let Some(u) = closest_unsettled(&dist, &settled) {
        let d = dist[u.index()];
        for edge in graph.out_edges(u) {
            let v = edge.to.index();
            if settled[v] {
                continue;
            }
            let cand = d + edge.weight;
            if cand < dist[v] {
                dist[v] = cand;
            }
        }
        settled[u.index()] = true;
        trace!(node = graph.name(u), distance = d, "settled");
    }

    dist
}

/// Unsettled node with the smallest finite distance; ties go to the lowest id.
fn closest_unsettled(dist: &[f64], settled: &[bool]) -> Option<NodeId> {
    let mut best: Option<usize> = None;
    for v in 0..dist.len() {
        if settled[v] || dist[v] == INF {
            continue;
        }
        if best.is_none_or(|b| dist[v] < dist[b]) {
            best = Some(v);
        }
    }
    best.map(NodeId::from_index)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Candidate {
    distance: f64,
    node: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn binary_heap(graph: &Graph, source: NodeId) -> Vec<f64> {
    let n = graph.node_count();
    let mut dist = vec![INF; n];
    let mut settled = vec![false; n];

    let mut heap = BinaryHeap::new();
    dist[source.index()] = 0.0;
    heap.push(Reverse(Candidate {
        distance: 0.0,
        node: source.index(),
    }));

    while let Some(Reverse(Candidate { distance: d, node: u })) = heap.pop() {
        if settled[u] || d != dist[u] {
            continue;
        }
        settled[u] = true;
        let id = NodeId::from_index(u);
        trace!(node = graph.name(id), distance = d, "settled");

        for edge in graph.out_edges(id) {
            let v = edge.to.index();
            if settled[v] {
                continue;
            }
            let cand = d + edge.weight;
            if cand < dist[v] {
                dist[v] = cand;
                heap.push(Reverse(Candidate {
                    distance: cand,
                    node: v,
                }));
            }
        }
    }

    dist
}

/// Final distances of one calculation, borrowed against the solved graph.
///
/// Unreachable nodes report [`INF`].
#[derive(Clone, Debug)]
pub struct Distances<'g> {
    graph: &'g Graph,
    source: NodeId,
    dist: Vec<f64>,
}

impl<'g> Distances<'g> {
    #[inline]
    pub fn start(&self) -> &'g str {
        self.graph.name(self.source)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.graph.node_id(name).map(|id| self.dist[id.index()])
    }

    #[inline]
    pub fn distance(&self, id: NodeId) -> f64 {
        self.dist[id.index()]
    }

    pub fn is_reachable(&self, name: &str) -> bool {
        self.get(name).is_some_and(|d| d != INF)
    }

    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != INF).count()
    }

    /// `(name, distance)` pairs in node insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'g str, f64)> + '_ {
        self.graph
            .nodes()
            .map(|(id, node)| (node.name(), self.dist[id.index()]))
    }

    pub fn to_map(&self) -> HashMap<String, f64> {
        self.iter().map(|(name, d)| (name.to_owned(), d)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.dist
    }
}
