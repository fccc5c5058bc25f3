//! Test utilities for Roadnet

use std::fs;

use serde_json::json;
use tempfile::TempDir;

/// Two nodes joined by a single edge.
pub fn simple_document() -> String {
    json!({
        "nodes": [ { "id": 1 }, { "id": 2 } ],
        "edges": [
            { "id": 10, "src": 1, "dst": 2, "length": 5, "speedLimit": 60, "capacity": 100 }
        ]
    })
    .to_string()
}

/// A small triangle with a two-way street between nodes 1 and 2.
pub fn triangle_document() -> String {
    json!({
        "nodes": [ { "id": 1 }, { "id": 2 }, { "id": 3 } ],
        "edges": [
            { "id": 1, "src": 1, "dst": 2, "length": 120, "speedLimit": 50, "capacity": 20 },
            { "id": 2, "src": 2, "dst": 1, "length": 120, "speedLimit": 50, "capacity": 20 },
            { "id": 3, "src": 2, "dst": 3, "length": 300, "speedLimit": 80, "capacity": 40 },
            { "id": 4, "src": 3, "dst": 1, "length": 450, "speedLimit": 30, "capacity": 10 }
        ]
    })
    .to_string()
}

/// Build a document from `(id)` nodes and `(id, src, dst)` edges with fixed attributes.
pub fn document(nodes: &[u32], edges: &[(u32, u32, u32)]) -> String {
    let nodes: Vec<_> = nodes.iter().map(|id| json!({ "id": id })).collect();
    let edges: Vec<_> = edges
        .iter()
        .map(|(id, src, dst)| {
            json!({
                "id": id, "src": src, "dst": dst,
                "length": 1, "speedLimit": 1, "capacity": 1
            })
        })
        .collect();
    json!({ "nodes": nodes, "edges": edges }).to_string()
}

/// Create a temporary resource root holding the given files.
pub fn create_resource_root(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    temp_dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_resource_root() {
        let temp_dir = create_resource_root(&[("maps/a.json", "{}"), ("b.json", "{}")]);
        let root = temp_dir.path();

        assert!(root.join("maps/a.json").exists());
        assert!(root.join("b.json").exists());
    }
}
