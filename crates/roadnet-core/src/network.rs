//! Load orchestration and read-only queries over the current snapshot
//!
//! A [`RoadNetwork`] owns the most recently loaded tables as an immutable
//! [`Snapshot`] behind a reader-writer lock. `load` builds a complete new
//! snapshot before taking the write lock and swaps it in with one assignment,
//! so readers see either the old tables or the new ones, never a mix. A
//! failed load leaves the previous snapshot in place.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::flatten::{FlatTables, flatten};
use crate::locator::{FsLocator, ResourceLocator};
use crate::parser::{ParseOptions, parse};

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub path: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Everything produced by one successful load.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tables: FlatTables,
    pub report: LoadReport,
}

/// Handle over a loaded road network.
pub struct RoadNetwork<L> {
    locator: L,
    options: ParseOptions,
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl<L> std::fmt::Debug for RoadNetwork<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("options", &self.options)
            .field("loaded", &self.read().is_some())
            .finish()
    }
}

impl RoadNetwork<FsLocator> {
    /// Network reading from the configured resource root.
    pub fn from_config(config: &LoaderConfig) -> Self {
        RoadNetwork::with_options(
            FsLocator::new(config.resource_root.clone()),
            config.parse_options(),
        )
    }
}

impl<L> RoadNetwork<L> {
    pub fn new(locator: L) -> Self {
        Self::with_options(locator, ParseOptions::default())
    }

    pub fn with_options(locator: L, options: ParseOptions) -> Self {
        RoadNetwork {
            locator,
            options,
            current: RwLock::new(None),
        }
    }

    // The snapshot is never mutated in place, so a poisoned lock still
    // guards a complete value.
    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<Snapshot>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<Snapshot>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    /// The current snapshot, for reading several tables consistently.
    pub fn snapshot(&self) -> Result<Arc<Snapshot>, LoadError> {
        self.read().clone().ok_or(LoadError::NotLoaded)
    }

    pub fn last_report(&self) -> Option<LoadReport> {
        self.read().as_ref().map(|s| s.report.clone())
    }

    fn table<T>(&self, pick: impl FnOnce(&FlatTables) -> &T) -> Result<T, LoadError>
    where
        T: Clone,
    {
        let guard = self.read();
        let snapshot = guard.as_ref().ok_or(LoadError::NotLoaded)?;
        Ok(pick(&snapshot.tables).clone())
    }

    pub fn node_ids(&self) -> Result<BTreeSet<u32>, LoadError> {
        self.table(|t| &t.node_ids)
    }

    /// Edge id -> `[source, destination]`.
    pub fn edge_endpoints(&self) -> Result<BTreeMap<u32, [u32; 2]>, LoadError> {
        self.table(|t| &t.edge_endpoints)
    }

    pub fn edge_length(&self) -> Result<BTreeMap<u32, u32>, LoadError> {
        self.table(|t| &t.edge_length)
    }

    pub fn edge_speed_limit(&self) -> Result<BTreeMap<u32, u32>, LoadError> {
        self.table(|t| &t.edge_speed_limit)
    }

    pub fn edge_capacity(&self) -> Result<BTreeMap<u32, u32>, LoadError> {
        self.table(|t| &t.edge_capacity)
    }
}

impl<L: ResourceLocator> RoadNetwork<L> {
    /// Read, validate and flatten the document at `path`, then replace the
    /// current snapshot with the result.
    pub fn load(&self, path: &str) -> Result<LoadReport, LoadError> {
        tracing::info!("Loading road network from path '{}'", path);

        let snapshot = match self.build(path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Load of '{}' failed: {}", path, e);
                return Err(e);
            }
        };
        let report = snapshot.report.clone();
        *self.write() = Some(Arc::new(snapshot));

        tracing::info!(
            "Loaded {} nodes, {} edges from '{}' at {}",
            report.node_count,
            report.edge_count,
            report.path,
            report.loaded_at.to_rfc3339()
        );
        Ok(report)
    }

    fn build(&self, path: &str) -> Result<Snapshot, LoadError> {
        let bytes = self.locator.open(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        let world = parse(&bytes, &self.options)?;
        let tables = flatten(&world);

        Ok(Snapshot {
            report: LoadReport {
                path: path.to_string(),
                node_count: tables.node_ids.len(),
                edge_count: tables.edge_count(),
                loaded_at: Utc::now(),
            },
            tables,
        })
    }
}
