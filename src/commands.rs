//! CLI command implementations

use roadnet_core::{LoaderConfig, RoadNetwork};
use roadnet_export::{JsonExporter, export_snapshot};

use crate::Table;

pub fn check(config: &LoaderConfig, path: &str) -> anyhow::Result<()> {
    let network = RoadNetwork::from_config(config);
    let report = network.load(path)?;

    println!(
        "{}: {} nodes, {} edges (loaded {})",
        report.path,
        report.node_count,
        report.edge_count,
        report.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}

pub fn dump(config: &LoaderConfig, path: &str, table: Table) -> anyhow::Result<()> {
    let network = RoadNetwork::from_config(config);
    network.load(path)?;

    let snapshot = network.snapshot()?;
    let exported = export_snapshot(&snapshot, &JsonExporter);

    let value = match table {
        Table::Nodes => exported.node_ids,
        Table::Endpoints => exported.edge_endpoints,
        Table::Length => exported.edge_length,
        Table::SpeedLimit => exported.edge_speed_limit,
        Table::Capacity => exported.edge_capacity,
        Table::All => exported.to_json(),
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
