//! JSON document parser
//!
//! Reads `{ "nodes": [...], "edges": [...] }` into a [`World`]. Nodes are
//! materialized in a first pass and edges resolved in a second, so an edge
//! may reference a node that appears later in the `nodes` array.

use serde_json::{Map, Value};

use crate::error::{EntityKind, ParseError, Result};
use crate::model::{EdgeAttributes, EdgeId, Node, NodeId};
use crate::world::World;

/// Validation knobs for the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject `0` for ids and attributes. Negative values are always rejected.
    pub require_positive: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            require_positive: true,
        }
    }
}

/// Parse raw UTF-8 JSON bytes.
pub fn parse(bytes: &[u8], options: &ParseOptions) -> Result<World> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ParseError::malformed_json(format!("not valid UTF-8: {e}")))?;
    parse_str(text, options)
}

/// Parse a JSON document held in a string.
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<World> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| ParseError::malformed_json(format!("invalid JSON: {e}")))?;
    let obj = root
        .as_object()
        .ok_or_else(|| ParseError::malformed_json("top-level value must be an object"))?;

    let nodes = array_field(obj, "nodes")?;
    let edges = array_field(obj, "edges")?;

    let mut world = World::new();

    for (index, item) in nodes.iter().enumerate() {
        let entry = FieldReader::new(EntityKind::Node, index, item, options)?;
        let id = NodeId(entry.int("id")?);
        world.insert_node(Node::new(id))?;
    }

    for (index, item) in edges.iter().enumerate() {
        let entry = FieldReader::new(EntityKind::Edge, index, item, options)?;
        let id = EdgeId(entry.int("id")?);
        let source = NodeId(entry.int("src")?);
        let destination = NodeId(entry.int("dst")?);
        let attrs = EdgeAttributes {
            length: entry.int("length")?,
            speed_limit: entry.int("speedLimit")?,
            capacity: entry.int("capacity")?,
        };
        world.insert_edge(id, source, destination, attrs)?;
    }

    tracing::debug!(
        "Parsed {} nodes, {} edges",
        world.node_count(),
        world.edge_count()
    );
    Ok(world)
}

fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
    match obj.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ParseError::malformed_json(format!("`{key}` must be an array"))),
        None => Err(ParseError::malformed_json(format!("missing `{key}` array"))),
    }
}

/// Typed access to the fields of one `nodes`/`edges` entry.
struct FieldReader<'a> {
    entity: EntityKind,
    index: usize,
    obj: &'a Map<String, Value>,
    options: &'a ParseOptions,
}

impl<'a> FieldReader<'a> {
    fn new(
        entity: EntityKind,
        index: usize,
        item: &'a Value,
        options: &'a ParseOptions,
    ) -> Result<Self> {
        let obj = item.as_object().ok_or_else(|| {
            ParseError::malformed_field(entity, index, "<entry>", "expected an object")
        })?;
        Ok(FieldReader {
            entity,
            index,
            obj,
            options,
        })
    }

    fn int(&self, field: &'static str) -> Result<u32> {
        let err = |reason: String| ParseError::malformed_field(self.entity, self.index, field, reason);

        let value = self.obj.get(field).ok_or_else(|| err("missing".into()))?;
        let n = match value {
            Value::Number(n) => n,
            other => return Err(err(format!("expected an integer, found {}", kind_of(other)))),
        };

        if let Some(v) = n.as_u64() {
            let v = u32::try_from(v).map_err(|_| err(format!("{v} is out of range")))?;
            if v == 0 && self.options.require_positive {
                return Err(err("must be positive".into()));
            }
            Ok(v)
        } else if n.is_i64() {
            Err(err(format!("{n} is negative")))
        } else if n.as_f64().is_some_and(|f| f == 0.0 && f.is_sign_negative()) {
            // serde_json reads `-0` as a float
            Err(err("-0 is negative".into()))
        } else {
            Err(err(format!("expected an integer, found {n}")))
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
