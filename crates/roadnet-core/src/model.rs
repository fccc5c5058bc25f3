//! Core data structures for the road network

use std::fmt;

/// Unique identifier for a node, as written in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Unique identifier for an edge, as written in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A junction in the road network. Nodes carry identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    pub id: NodeId,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Node { id }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node#{}", self.id)
    }
}

/// Numeric attributes attached to every road segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeAttributes {
    pub length: u32,
    pub speed_limit: u32,
    pub capacity: u32,
}

/// A directed road segment between two nodes.
///
/// Endpoints are referenced by id; the nodes themselves are owned by the
/// [`World`](crate::world::World) that holds this edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub destination: NodeId,
    pub length: u32,
    pub speed_limit: u32,
    pub capacity: u32,
}

impl Edge {
    pub fn attributes(&self) -> EdgeAttributes {
        EdgeAttributes {
            length: self.length,
            speed_limit: self.speed_limit,
            capacity: self.capacity,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge#{}[{} --> {}]", self.id, self.source, self.destination)
    }
}
