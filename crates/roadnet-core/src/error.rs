//! Error types for loading and querying a road network

use thiserror::Error;

use crate::locator::LocateError;
use crate::model::{EdgeId, NodeId};

/// Which kind of document entry a field error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Node,
    Edge,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Node => f.write_str("node"),
            EntityKind::Edge => f.write_str("edge"),
        }
    }
}

/// Failures while turning a JSON document into a [`World`](crate::World).
#[derive(Debug, Error)]
pub enum ParseError {
    /// Not UTF-8, not JSON, or not the `{ "nodes": [...], "edges": [...] }` shape.
    #[error("Malformed document: {0}")]
    MalformedJson(String),

    #[error("Malformed {entity} entry #{index}, field `{field}`: {reason}")]
    MalformedField {
        entity: EntityKind,
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Duplicate node id {0}")]
    DuplicateNodeId(NodeId),

    #[error("Duplicate edge id {0}")]
    DuplicateEdgeId(EdgeId),

    #[error("Edge {edge} references unknown node {node}")]
    UnresolvedEndpoint { edge: EdgeId, node: NodeId },
}

impl ParseError {
    pub(crate) fn malformed_json(msg: impl Into<String>) -> Self {
        ParseError::MalformedJson(msg.into())
    }

    pub(crate) fn malformed_field(
        entity: EntityKind,
        index: usize,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ParseError::MalformedField {
            entity,
            index,
            field,
            reason: reason.into(),
        }
    }
}

/// Failures surfaced by [`RoadNetwork`](crate::RoadNetwork).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: LocateError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No road network has been loaded")]
    NotLoaded,
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
