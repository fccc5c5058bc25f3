//! JSON rendering of the flat tables

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value, json};

use crate::{ExportedTables, ValueExporter};

/// Renders sets and sequences as arrays and maps as objects keyed by the
/// decimal id.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ValueExporter for JsonExporter {
    type Value = Value;

    fn id_set(&self, ids: &BTreeSet<u32>) -> Value {
        Value::Array(ids.iter().map(|&id| Value::from(id)).collect())
    }

    fn id_sequence(&self, ids: &[u32]) -> Value {
        Value::Array(ids.iter().map(|&id| Value::from(id)).collect())
    }

    fn id_map(&self, map: &BTreeMap<u32, u32>) -> Value {
        object(map.iter().map(|(k, &v)| (*k, Value::from(v))))
    }

    fn id_sequence_map(&self, map: &BTreeMap<u32, [u32; 2]>) -> Value {
        object(map.iter().map(|(k, pair)| (*k, self.id_sequence(pair))))
    }
}

fn object(entries: impl Iterator<Item = (u32, Value)>) -> Value {
    let map: Map<String, Value> = entries.map(|(k, v)| (k.to_string(), v)).collect();
    Value::Object(map)
}

impl ExportedTables<Value> {
    /// One object holding every table under its camelCase name.
    pub fn to_json(&self) -> Value {
        json!({
            "nodeIds": self.node_ids,
            "edgeEndpoints": self.edge_endpoints,
            "edgeLength": self.edge_length,
            "edgeSpeedLimit": self.edge_speed_limit,
            "edgeCapacity": self.edge_capacity,
        })
    }
}
