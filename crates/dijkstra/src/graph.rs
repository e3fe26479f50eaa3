use std::collections::HashMap;

use tracing::debug;
use tracing::trace;

use crate::error::GraphError;

/// Stable index of a node inside the [`Graph`] that created it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Directed weighted arc. `weight` is always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Weighted directed graph with uniquely named nodes.
///
/// Nodes live in an arena and edges refer to their target by [`NodeId`], so
/// the graph can be shared immutably by any number of distance calculations
/// once it has been built.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
            index: HashMap::with_capacity(node_capacity),
        }
    }

    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId, GraphError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            debug!(%name, "rejected duplicate node");
            return Err(GraphError::DuplicateNode { name });
        }

        let id = NodeId::from_index(self.nodes.len());
        trace!(%name, index = id.index(), "added node");
        self.index.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            edges: Vec::new(),
        });
        Ok(id)
    }

    /// Connects `from` to `to`. With `bidirectional`, an independent mirror
    /// edge of the same weight is added from `to` back to `from`.
    pub fn add_connection(
        &mut self,
        from: &str,
        to: &str,
        weight: f64,
        bidirectional: bool,
    ) -> Result<(), GraphError> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        if from_id == to_id {
            debug!(node = from, "rejected self-loop");
            return Err(GraphError::SelfLoop {
                name: from.to_owned(),
            });
        }
        if !(weight > 0.0 && weight.is_finite()) {
            debug!(from, to, weight, "rejected edge weight");
            return Err(GraphError::InvalidWeight { weight });
        }

        self.nodes[from_id.index()].edges.push(Edge { to: to_id, weight });
        if bidirectional {
            self.nodes[to_id.index()].edges.push(Edge {
                to: from_id,
                weight,
            });
        }
        trace!(from, to, weight, bidirectional, "added connection");
        Ok(())
    }

    fn require(&self, name: &str) -> Result<NodeId, GraphError> {
        self.node_id(name).ok_or_else(|| GraphError::UnknownNode {
            name: name.to_owned(),
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    #[inline]
    pub fn out_edges(&self, id: NodeId) -> &[Edge] {
        &self.nodes[id.index()].edges
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }
}
