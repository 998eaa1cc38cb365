//! Turns grouped geographic coordinates into planar meshes.
//!
//! This is the pure part of a map importer: parsing the source document and
//! persisting the meshes are left to the caller.

mod feature;
mod mesh_features;
mod params;

pub use feature::{FeatureGeometry, FeatureKind, FeatureMesh, LonLat};
pub use mesh_features::{ImportOutput, MeshFeatures};
pub use params::ImportParams;
