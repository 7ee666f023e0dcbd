//! Atlaspin — city bookmarking and world-map rendering core.
//!
//! Resolves city names to coordinates from a SQLite reference catalog,
//! keeps per-user saved-city lists, computes great-circle distances, and
//! renders equirectangular world maps with markers as in-memory PNGs.

pub mod catalog;
pub mod distance;
pub mod error;
pub mod map;
pub mod registry;
pub mod store;

pub use catalog::{City, CityCatalog};
pub use error::Error;
pub use map::{DistanceMap, MapRenderer};
pub use registry::UserCityRegistry;
pub use store::Store;
