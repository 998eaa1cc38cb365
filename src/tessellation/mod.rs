mod mesh_attributes;
mod ribbon_style;
mod tessellate_ribbon;
mod tessellate_with_holes;
mod triangulate_polygon;

pub use mesh_attributes::Aabb;
pub use ribbon_style::RibbonStyle;
pub use tessellate_ribbon::TessellateRibbon;
pub use tessellate_with_holes::TessellateWithHoles;
pub use triangulate_polygon::{
    expected_triangle_count, TriangulatePolygon, Triangulation, TriangulationStatus,
};

use crate::math::{Point2, Point3};

/// A flat triangle mesh.
///
/// Only positions, texture coordinates and indices are stored. Bounds and
/// normals are derived on demand, see [`TriangleMesh::bounds`] and
/// [`TriangleMesh::vertex_normals`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// UV coordinates, either empty or parallel to `vertices`.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Lifts a planar ring and its triangulation into a mesh at `z = 0`.
    ///
    /// Vertices keep the ring order, so the triangulation indices are used
    /// as-is.
    #[must_use]
    pub fn from_polygon(ring: &[Point2], triangulation: &Triangulation) -> Self {
        Self {
            vertices: ring.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
            uvs: Vec::new(),
            indices: triangulation.indices.clone(),
        }
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns a copy with every vertex position multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| Point3::from(v.coords * factor)).collect(),
            uvs: self.uvs.clone(),
            indices: self.indices.clone(),
        }
    }
}
