//! Resource lookup for `load` paths

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves a load path to the full contents of the resource.
pub trait ResourceLocator: Send + Sync {
    fn open(&self, path: &str) -> Result<Vec<u8>, LocateError>;
}

/// Reads resources from a directory tree.
///
/// Paths are taken relative to `root`; a leading `/` is stripped so that
/// `"/maps/city.json"` and `"maps/city.json"` name the same file.
#[derive(Debug, Clone)]
pub struct FsLocator {
    root: PathBuf,
}

impl FsLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsLocator { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                // no escaping the root
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(resolved)
    }
}

impl ResourceLocator for FsLocator {
    fn open(&self, path: &str) -> Result<Vec<u8>, LocateError> {
        let full = self
            .resolve(path)
            .ok_or_else(|| LocateError::NotFound(path.to_string()))?;
        tracing::debug!("Reading {}", full.display());
        match std::fs::read(&full) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(LocateError::NotFound(path.to_string()))
            }
            Err(err) => Err(LocateError::Io(err)),
        }
    }
}

/// In-memory resources, for bundled documents and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.resources.insert(path.into(), contents.into());
    }

    pub fn with(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl ResourceLocator for MemoryLocator {
    fn open(&self, path: &str) -> Result<Vec<u8>, LocateError> {
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| LocateError::NotFound(path.to_string()))
    }
}
