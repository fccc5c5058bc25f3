//! Value export for loaded road networks
//!
//! Embedders render the flat tables into their own runtime's values by
//! implementing [`ValueExporter`]. Only primitive containers cross this
//! boundary: sets of ids, id sequences and id-keyed maps.

pub mod json;


use std::collections::{BTreeMap, BTreeSet};

use roadnet_core::{FlatTables, Snapshot};

pub use json::JsonExporter;

/// Renders language-neutral integer containers into a host value type.
pub trait ValueExporter {
    type Value;

    fn id_set(&self, ids: &BTreeSet<u32>) -> Self::Value;

    fn id_sequence(&self, ids: &[u32]) -> Self::Value;

    fn id_map(&self, map: &BTreeMap<u32, u32>) -> Self::Value;

    /// Map from id to a sequence of ids, e.g. edge -> `[source, destination]`.
    fn id_sequence_map(&self, map: &BTreeMap<u32, [u32; 2]>) -> Self::Value;
}

/// All five tables, rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedTables<V> {
    pub node_ids: V,
    pub edge_endpoints: V,
    pub edge_length: V,
    pub edge_speed_limit: V,
    pub edge_capacity: V,
}

pub fn export_tables<E: ValueExporter>(tables: &FlatTables, exporter: &E) -> ExportedTables<E::Value> {
    ExportedTables {
        node_ids: exporter.id_set(&tables.node_ids),
        edge_endpoints: exporter.id_sequence_map(&tables.edge_endpoints),
        edge_length: exporter.id_map(&tables.edge_length),
        edge_speed_limit: exporter.id_map(&tables.edge_speed_limit),
        edge_capacity: exporter.id_map(&tables.edge_capacity),
    }
}

pub fn export_snapshot<E: ValueExporter>(snapshot: &Snapshot, exporter: &E) -> ExportedTables<E::Value> {
    export_tables(&snapshot.tables, exporter)
}
