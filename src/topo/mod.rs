//! TopoJSON decoding and the nation/state/county geometry catalog.

mod catalog;
mod decode;
mod model;

pub use catalog::{GeometryCatalog, GeometryFeature};
pub use model::{parse_topology, FeatureId, Topology};
