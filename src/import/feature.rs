use crate::tessellation::TriangleMesh;

/// A `[longitude, latitude]` pair in degrees, in GeoJSON order.
pub type LonLat = [f64; 2];

/// Geometry of a single map feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    /// A centerline, meshed as a ribbon.
    LineString(Vec<LonLat>),
    /// Several centerlines, each meshed as its own ribbon.
    MultiLineString(Vec<Vec<LonLat>>),
    /// The first ring is the outline, the remaining rings are holes.
    Polygon(Vec<Vec<LonLat>>),
    /// Several polygons, each meshed on its own.
    MultiPolygon(Vec<Vec<Vec<LonLat>>>),
}

/// What a generated mesh represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Ribbon along a line feature.
    Road,
    /// Flat fill of a polygon feature.
    Footprint,
}

/// A mesh generated for one part of a feature.
#[derive(Debug, Clone)]
pub struct FeatureMesh {
    /// Running number of this mesh within one import, starting at 0.
    pub sequence: usize,
    /// Index of the source feature in the input slice.
    pub feature: usize,
    pub kind: FeatureKind,
    pub mesh: TriangleMesh,
    /// `false` if ear clipping could only cover part of the polygon.
    pub complete: bool,
}
