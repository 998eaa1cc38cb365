use std::collections::HashMap;

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, Point2 as SpadePoint2, Triangulation};
use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::math::polygon_2d::open_ring;
use crate::math::{Point2, Point3};

use super::TriangleMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Tessellates a polygon with holes using a constrained Delaunay
/// triangulation.
///
/// The outline and every hole are inserted as closed constraint rings.
/// Triangles are kept when an odd number of ring edges separates them from
/// the convex hull, so holes come out empty. Ring winding does not matter.
#[derive(Debug)]
pub struct TessellateWithHoles<'a> {
    outer: &'a [Point2],
    holes: &'a [Vec<Point2>],
}

impl<'a> TessellateWithHoles<'a> {
    /// Creates a new tessellation operation.
    #[must_use]
    pub fn new(outer: &'a [Point2], holes: &'a [Vec<Point2>]) -> Self {
        Self { outer, holes }
    }

    /// Executes the tessellation, producing a flat mesh at `z = 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring has fewer than 3 distinct points, a
    /// coordinate is NaN or infinite, or two ring edges cross (a hole
    /// leaving the outline, overlapping holes, a self-intersecting ring).
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut cdt = Cdt::new();
        insert_ring(&mut cdt, self.outer, "outline")?;
        for hole in self.holes {
            insert_ring(&mut cdt, hole, "hole")?;
        }

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<FixedVertexHandle, u32> = HashMap::new();

        for corners in interior_triangles(&cdt) {
            let tri = corners.map(|handle| {
                *vertex_map.entry(handle).or_insert_with(|| {
                    let pos = cdt.vertex(handle).position();
                    mesh.vertices.push(Point3::new(pos.x, pos.y, 0.0));
                    (mesh.vertices.len() - 1) as u32
                })
            });
            mesh.indices.push(tri);
        }

        debug!(
            holes = self.holes.len(),
            vertices = mesh.vertices.len(),
            triangles = mesh.indices.len(),
            "polygon with holes tessellated"
        );
        Ok(mesh)
    }
}

/// Inserts a ring as a closed loop of constraint edges.
///
/// The closing coordinate and consecutive duplicates collapse onto the same
/// vertex. Every edge is checked against the constraints already present
/// before it is added.
fn insert_ring(cdt: &mut Cdt, ring: &[Point2], role: &str) -> Result<()> {
    let mut handles: Vec<FixedVertexHandle> = Vec::with_capacity(ring.len());
    for p in open_ring(ring) {
        let handle = cdt.insert(SpadePoint2::new(p.x, p.y)).map_err(|e| {
            TessellationError::Failed(format!("{role} point ({}, {}): {e}", p.x, p.y))
        })?;
        if handles.last() != Some(&handle) {
            handles.push(handle);
        }
    }
    while handles.len() > 1 && handles.first() == handles.last() {
        handles.pop();
    }

    if handles.len() < 3 {
        return Err(TessellationError::Failed(format!(
            "{role} has {} distinct points, at least 3 are required",
            handles.len()
        ))
        .into());
    }

    for (i, &from) in handles.iter().enumerate() {
        let to = handles[(i + 1) % handles.len()];
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(format!(
                "{role} edge {i} crosses another ring: constraint loops intersect"
            ))
            .into());
        }
        cdt.add_constraint(from, to);
    }
    Ok(())
}

/// Walks the triangulation from the convex hull inwards and returns the
/// corners of every triangle that lies inside the polygon.
///
/// A triangle's depth is the number of constraint edges crossed on the way
/// from outside the hull; odd depth means inside.
fn interior_triangles(cdt: &Cdt) -> Vec<[FixedVertexHandle; 3]> {
    let mut depth: Vec<Option<u32>> = vec![None; cdt.num_all_faces()];
    let mut stack: Vec<(FixedFaceHandle<InnerTag>, u32)> = Vec::new();

    for edge in cdt.convex_hull() {
        let Some(face) = edge.face().as_inner().or_else(|| edge.rev().face().as_inner()) else {
            continue;
        };
        let d = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
        stack.push((face.fix(), d));
    }

    let mut triangles = Vec::new();
    while let Some((fix, d)) = stack.pop() {
        let slot = &mut depth[fix.index()];
        if slot.is_some() {
            continue;
        }
        *slot = Some(d);

        let face = cdt.face(fix);
        if d % 2 == 1 {
            triangles.push(face.vertices().map(|v| v.fix()));
        }
        for edge in face.adjacent_edges() {
            if let Some(neighbor) = edge.rev().face().as_inner() {
                if depth[neighbor.fix().index()].is_none() {
                    let crossing = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                    stack.push((neighbor.fix(), d + crossing));
                }
            }
        }
    }
    triangles
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square(min: f64, max: f64) -> Vec<Point2> {
        vec![
            Point2::new(min, min),
            Point2::new(max, min),
            Point2::new(max, max),
            Point2::new(min, max),
        ]
    }

    #[test]
    fn square_without_holes() {
        let outer = square(0.0, 4.0);
        let mesh = TessellateWithHoles::new(&outer, &[]).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 2);
        assert_relative_eq!(mesh.surface_area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn square_with_square_hole() {
        let outer = square(0.0, 10.0);
        let holes = vec![square(3.0, 7.0)];
        let mesh = TessellateWithHoles::new(&outer, &holes).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 8);
        assert_relative_eq!(mesh.surface_area(), 100.0 - 16.0, epsilon = 1e-9);
    }

    #[test]
    fn concave_outline_with_hole() {
        // U shape; the notch between the arms must stay empty.
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
            Point2::new(6.0, 9.0),
            Point2::new(6.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 9.0),
        ];
        let holes = vec![square(1.0, 2.0)];
        let mesh = TessellateWithHoles::new(&outer, &holes).execute().unwrap();
        assert_relative_eq!(mesh.surface_area(), 81.0 - 18.0 - 1.0, epsilon = 1e-9);
    }

    #[test]
    fn closing_point_and_winding_are_ignored() {
        let mut outer = square(0.0, 10.0);
        outer.reverse();
        outer.push(outer[0]);
        let mut hole = square(3.0, 7.0);
        hole.push(hole[0]);
        let mesh = TessellateWithHoles::new(&outer, &[hole]).execute().unwrap();
        assert_relative_eq!(mesh.surface_area(), 84.0, epsilon = 1e-9);
    }

    #[test]
    fn repeated_points_collapse() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        let mesh = TessellateWithHoles::new(&outer, &[]).execute().unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_relative_eq!(mesh.surface_area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_hole_fails() {
        let outer = square(0.0, 10.0);
        let holes = vec![vec![
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(1.0, 1.0),
        ]];
        assert!(TessellateWithHoles::new(&outer, &holes).execute().is_err());
    }

    #[test]
    fn nan_coordinate_fails() {
        let mut outer = square(0.0, 10.0);
        outer[2] = Point2::new(f64::NAN, 1.0);
        assert!(TessellateWithHoles::new(&outer, &[]).execute().is_err());
    }

    #[test]
    fn hole_crossing_outline_fails() {
        let outer = square(0.0, 10.0);
        let holes = vec![vec![
            Point2::new(5.0, 5.0),
            Point2::new(15.0, 5.0),
            Point2::new(15.0, 7.0),
            Point2::new(5.0, 7.0),
        ]];
        let err = TessellateWithHoles::new(&outer, &holes).execute().unwrap_err();
        assert!(err.to_string().contains("constraint loops intersect"), "{err}");
    }

    #[test]
    fn self_intersecting_outline_fails() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ];
        let holes = vec![square(1.5, 2.5)];
        assert!(TessellateWithHoles::new(&outer, &holes).execute().is_err());
    }
}
