//! Projection of a [`World`] into primitive integer-keyed tables

use std::collections::{BTreeMap, BTreeSet};

use crate::world::World;

/// The public query surface: node ids plus four edge-keyed tables.
///
/// All edge tables share exactly the same key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTables {
    pub node_ids: BTreeSet<u32>,
    /// Edge id -> `[source, destination]`.
    pub edge_endpoints: BTreeMap<u32, [u32; 2]>,
    pub edge_length: BTreeMap<u32, u32>,
    pub edge_speed_limit: BTreeMap<u32, u32>,
    pub edge_capacity: BTreeMap<u32, u32>,
}

impl FlatTables {
    /// Check that the edge-keyed tables agree on their keys.
    pub fn is_consistent(&self) -> bool {
        let keys = self.edge_endpoints.keys();
        self.edge_length.len() == self.edge_endpoints.len()
            && self.edge_speed_limit.len() == self.edge_endpoints.len()
            && self.edge_capacity.len() == self.edge_endpoints.len()
            && keys.clone().eq(self.edge_length.keys())
            && keys.clone().eq(self.edge_speed_limit.keys())
            && keys.eq(self.edge_capacity.keys())
    }

    pub fn edge_count(&self) -> usize {
        self.edge_endpoints.len()
    }
}

/// Build the flat tables from a validated world. Cannot fail.
pub fn flatten(world: &World) -> FlatTables {
    let mut tables = FlatTables::default();

    for node in world.nodes() {
        tables.node_ids.insert(node.id.0);
    }

    for edge in world.edges() {
        let id = edge.id.0;
        tables
            .edge_endpoints
            .insert(id, [edge.source.0, edge.destination.0]);
        tables.edge_length.insert(id, edge.length);
        tables.edge_speed_limit.insert(id, edge.speed_limit);
        tables.edge_capacity.insert(id, edge.capacity);
    }

    debug_assert!(tables.is_consistent());
    tables
}
