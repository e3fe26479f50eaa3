use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::GraphError;
use crate::graph::Graph;

const C_MAX: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    AlmostLine,
    GridRandom,
    Disconnected,
}

impl GraphCase {
    pub const ALL: [GraphCase; 5] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::AlmostLine,
        Self::GridRandom,
        Self::Disconnected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::Disconnected => "disconnected",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: String,
}

/// Builds a reproducible graph of roughly `size` nodes. Nodes are named
/// `v0`, `v1`, ... and every weight is a whole number in `1..=1_000_000`, so
/// path sums stay exact in `f64`.
pub fn generate_case(
    case: GraphCase,
    size: usize,
    seed: u64,
) -> Result<GeneratedGraph, GraphError> {
    let (n, edges, source) = match case {
        GraphCase::SparseRandom => sparse_random_edges(size.max(8), seed, 4),
        GraphCase::DenseRandom => dense_random_edges(size.max(8), seed),
        GraphCase::AlmostLine => almost_line_edges(size.max(8), seed),
        GraphCase::GridRandom => grid_random_edges(size.max(16), seed),
        GraphCase::Disconnected => disconnected_edges(size.max(8), seed),
    };

    let mut graph = Graph::with_capacity(n);
    for i in 0..n {
        graph.add_node(node_name(i))?;
    }
    for &(u, v, w) in &edges {
        graph.add_connection(&node_name(u), &node_name(v), w as f64, false)?;
    }

    Ok(GeneratedGraph {
        graph,
        source: node_name(source),
    })
}

#[inline]
pub fn node_name(index: usize) -> String {
    format!("v{index}")
}

type EdgeList = Vec<(usize, usize, u64)>;

fn sparse_random_edges(n: usize, seed: u64, edge_factor: usize) -> (usize, EdgeList, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(1..=C_MAX));
    }

    let source = rng.random_range(0..n);
    (n, edges, source)
}

fn dense_random_edges(size: usize, seed: u64) -> (usize, EdgeList, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = floor_sqrt(size).max(8);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u, v, rng.random_range(1..=C_MAX)));
            }
        }
    }

    let source = rng.random_range(0..n);
    (n, edges, source)
}

fn almost_line_edges(n: usize, seed: u64) -> (usize, EdgeList, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(1..=C_MAX));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(1..=C_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0];
        edge.1 = perm[edge.1];
    }
    edges.shuffle(&mut rng);

    (n, edges, perm[0])
}

fn grid_random_edges(size: usize, seed: u64) -> (usize, EdgeList, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 4);

    let index = |i: usize, j: usize| -> usize { i * len + j };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(1..=C_MAX)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(1..=C_MAX)));
            }
            if j > 0 {
                edges.push((index(i, j), index(i, j - 1), rng.random_range(1..=C_MAX)));
            }
            if i > 0 {
                edges.push((index(i, j), index(i - 1, j), rng.random_range(1..=C_MAX)));
            }
        }
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    (n, edges, source)
}

/// Two random halves with edges only from the second half into the first,
/// so a source in the first half cannot reach the second.
fn disconnected_edges(n: usize, seed: u64) -> (usize, EdgeList, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = n / 2;
    let mut edges = Vec::with_capacity(n * 3);
    let mut used = HashSet::with_capacity(n * 6);

    while edges.len() < n * 3 {
        let (u, v) = match rng.random_range(0..3) {
            0 => (rng.random_range(0..half), rng.random_range(0..half)),
            1 => (rng.random_range(half..n), rng.random_range(half..n)),
            _ => (rng.random_range(half..n), rng.random_range(0..half)),
        };
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(1..=C_MAX));
    }

    let source = rng.random_range(0..half);
    (n, edges, source)
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut EdgeList,
    used: &mut HashSet<(usize, usize)>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert((u, v)) {
        edges.push((u, v, weight));
        true
    } else {
        false
    }
}
