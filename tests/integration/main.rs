//! Integration tests for Roadnet
//!
//! These tests drive the loader through the filesystem and the built CLI.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::process::Command;

use roadnet_core::{FsLocator, LoadError, ParseError, RoadNetwork};
use roadnet_export::{JsonExporter, export_snapshot};
use tempfile::TempDir;

const CITY: &str = r#"{
  "nodes": [ { "id": 1 }, { "id": 2 }, { "id": 3 } ],
  "edges": [
    { "id": 10, "src": 1, "dst": 2, "length": 5, "speedLimit": 60, "capacity": 100 },
    { "id": 11, "src": 2, "dst": 3, "length": 8, "speedLimit": 50, "capacity": 40 }
  ]
}"#;

const DUPLICATE_NODE: &str = r#"{
  "nodes": [ { "id": 3 }, { "id": 3 } ],
  "edges": []
}"#;

fn resource_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("maps")).unwrap();
    fs::write(temp_dir.path().join("maps/city.json"), CITY).unwrap();
    fs::write(temp_dir.path().join("maps/dup.json"), DUPLICATE_NODE).unwrap();
    temp_dir
}

fn roadnet(root: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roadnet"));
    cmd.arg("--root").arg(root.path());
    cmd
}

/// Test loading from disk and querying every table
#[test]
fn test_load_from_filesystem() {
    let root = resource_root();
    let network = RoadNetwork::new(FsLocator::new(root.path()));

    network.load("/maps/city.json").unwrap();

    assert_eq!(network.node_ids().unwrap(), BTreeSet::from([1, 2, 3]));
    assert_eq!(
        network.edge_endpoints().unwrap(),
        BTreeMap::from([(10, [1, 2]), (11, [2, 3])])
    );
    assert_eq!(network.edge_length().unwrap(), BTreeMap::from([(10, 5), (11, 8)]));
    assert_eq!(network.edge_speed_limit().unwrap(), BTreeMap::from([(10, 60), (11, 50)]));
    assert_eq!(network.edge_capacity().unwrap(), BTreeMap::from([(10, 100), (11, 40)]));
}

/// Test that a rejected document leaves the earlier load queryable
#[test]
fn test_rejected_reload_keeps_tables() {
    let root = resource_root();
    let network = RoadNetwork::new(FsLocator::new(root.path()));
    network.load("maps/city.json").unwrap();

    let err = network.load("maps/dup.json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(ParseError::DuplicateNodeId(_))));

    assert_eq!(network.node_ids().unwrap(), BTreeSet::from([1, 2, 3]));
}

/// Test exporting a filesystem load to JSON
#[test]
fn test_export_after_load() {
    let root = resource_root();
    let network = RoadNetwork::new(FsLocator::new(root.path()));
    network.load("maps/city.json").unwrap();

    let exported = export_snapshot(&network.snapshot().unwrap(), &JsonExporter);
    assert_eq!(exported.node_ids, serde_json::json!([1, 2, 3]));
    assert_eq!(exported.edge_endpoints["11"], serde_json::json!([2, 3]));
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_roadnet"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Load and validate road network documents"));
}

#[test]
fn test_cli_check() {
    let root = resource_root();
    let output = roadnet(&root)
        .args(["check", "maps/city.json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("maps/city.json: 3 nodes, 2 edges (loaded "));
    assert!(stdout.trim_end().ends_with("UTC)"));
}

#[test]
fn test_cli_dump_table() {
    let root = resource_root();
    let output = roadnet(&root)
        .args(["dump", "maps/city.json", "--table", "speed-limit"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "10": 60, "11": 50 }));
}

#[test]
fn test_cli_reports_failures() {
    let root = resource_root();

    let output = roadnet(&root)
        .args(["check", "maps/dup.json"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate node id 3"));

    let output = roadnet(&root)
        .args(["check", "maps/missing.json"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}
