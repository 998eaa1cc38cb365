use crate::math::{Point3, Vector3};

use super::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Returns the box extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }
}

impl TriangleMesh {
    /// Computes the axis-aligned bounds of all vertices.
    ///
    /// Returns `None` for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        let (first, rest) = self.vertices.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for v in rest {
            min = min.inf(v);
            max = max.sup(v);
        }
        Some(Aabb { min, max })
    }

    /// Computes per-vertex normals by accumulating area-weighted face normals.
    ///
    /// Vertices not referenced by any non-degenerate triangle get the zero
    /// vector. Triangles with an index outside `vertices` are ignored.
    #[must_use]
    pub fn vertex_normals(&self) -> Vec<Vector3> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let Some([v0, v1, v2]) = self.corners(tri) else {
                continue;
            };
            let face = (v1 - v0).cross(&(v2 - v0));
            for &i in tri {
                normals[i as usize] += face;
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros);
        }
        normals
    }

    /// Sums the areas of all triangles, ignoring those with an index outside
    /// `vertices`.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.indices
            .iter()
            .filter_map(|tri| self.corners(tri))
            .map(|[v0, v1, v2]| (v1 - v0).cross(&(v2 - v0)).norm() * 0.5)
            .sum()
    }

    /// Resolves a triangle's corner positions, or `None` if an index is out
    /// of range.
    fn corners(&self, tri: &[u32; 3]) -> Option<[Point3; 3]> {
        Some([
            *self.vertices.get(tri[0] as usize)?,
            *self.vertices.get(tri[1] as usize)?,
            *self.vertices.get(tri[2] as usize)?,
        ])
    }
}
