//! Roadnet Core — road network model, JSON loader, and flat lookup tables

pub mod model;
pub mod world;
pub mod parser;
pub mod flatten;
pub mod network;
pub mod locator;
pub mod config;
pub mod error;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, EdgeId, Node, Edge, EdgeAttributes};
pub use world::World;
pub use parser::{ParseOptions, parse, parse_str};
pub use flatten::{FlatTables, flatten};
pub use network::{RoadNetwork, Snapshot, LoadReport};
pub use locator::{ResourceLocator, FsLocator, MemoryLocator, LocateError};
pub use config::{LoaderConfig, CONFIG_FILE};
pub use error::{ParseError, LoadError, ConfigError, EntityKind};
