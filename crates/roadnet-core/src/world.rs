//! Validated road graph using petgraph::StableDiGraph keyed by document ids

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};

use crate::error::{ParseError, Result};
use crate::model::*;

/// The road graph: nodes and directed edges, both unique by id.
///
/// Insertion enforces referential integrity, so every edge held here names
/// two nodes that were already present when it was added.
pub struct World {
    inner: StableDiGraph<Node, Edge>,
    node_index: HashMap<NodeId, NodeIndex>,
    edge_index: HashMap<EdgeId, EdgeIndex>,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl World {
    pub fn new() -> Self {
        World {
            inner: StableDiGraph::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Add a node. Fails if a node with the same id is already present.
    pub fn insert_node(&mut self, node: Node) -> Result<()> {
        if self.node_index.contains_key(&node.id) {
            return Err(ParseError::DuplicateNodeId(node.id));
        }
        let idx = self.inner.add_node(node);
        self.node_index.insert(node.id, idx);
        Ok(())
    }

    /// Add an edge between two existing nodes.
    pub fn insert_edge(
        &mut self,
        id: EdgeId,
        source: NodeId,
        destination: NodeId,
        attrs: EdgeAttributes,
    ) -> Result<()> {
        if self.edge_index.contains_key(&id) {
            return Err(ParseError::DuplicateEdgeId(id));
        }
        let src_idx = self.resolve(id, source)?;
        let dst_idx = self.resolve(id, destination)?;

        let edge = Edge {
            id,
            source,
            destination,
            length: attrs.length,
            speed_limit: attrs.speed_limit,
            capacity: attrs.capacity,
        };
        let idx = self.inner.add_edge(src_idx, dst_idx, edge);
        self.edge_index.insert(id, idx);
        Ok(())
    }

    fn resolve(&self, edge: EdgeId, node: NodeId) -> Result<NodeIndex> {
        self.node_index
            .get(&node)
            .copied()
            .ok_or(ParseError::UnresolvedEndpoint { edge, node })
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let idx = self.node_index.get(&id)?;
        self.inner.node_weight(*idx)
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        let idx = self.edge_index.get(&id)?;
        self.inner.edge_weight(*idx)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// Edges leaving `source`. Empty if the node is unknown.
    pub fn edges_from(&self, source: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges_directed(source, Direction::Outgoing)
    }

    /// Edges arriving at `destination`. Empty if the node is unknown.
    pub fn edges_to(&self, destination: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges_directed(destination, Direction::Incoming)
    }

    fn edges_directed(&self, node: NodeId, dir: Direction) -> impl Iterator<Item = &Edge> {
        self.node_index
            .get(&node)
            .into_iter()
            .flat_map(move |&idx| self.inner.edges_directed(idx, dir))
            .map(|edge_ref| edge_ref.weight())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
