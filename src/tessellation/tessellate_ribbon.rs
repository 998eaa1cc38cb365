use tracing::debug;

use crate::math::polygon_2d::normalize_or_zero;
use crate::math::{Point2, Vector2};

use super::ribbon_style::RibbonStyle;
use super::TriangleMesh;

/// Below this squared length the averaged tangent at a vertex is treated as
/// a reversal and the outgoing direction is used instead.
const REVERSAL_THRESHOLD_SQ: f64 = 1e-6;

/// Generates a constant-width ribbon mesh along a polyline.
///
/// Each polyline point contributes two vertices, offset to the left and right
/// of the centerline by half the stroke width. Interior points use the
/// averaged tangent of the two adjacent segments; the offset is not scaled,
/// so sharp bends narrow the ribbon rather than producing miter spikes.
///
/// The ribbon lies in the XY plane at `z = 0`. UVs run `u = 0` on the left
/// rail and `u = 1` on the right, with `v` going from 0 to 1 by point index.
#[derive(Debug)]
pub struct TessellateRibbon<'a> {
    points: &'a [Point2],
    style: RibbonStyle,
}

impl<'a> TessellateRibbon<'a> {
    /// Creates a new ribbon tessellation operation.
    #[must_use]
    pub fn new(points: &'a [Point2], style: RibbonStyle) -> Self {
        Self { points, style }
    }

    /// Executes the tessellation.
    ///
    /// Fewer than 2 points yield an empty mesh. Coincident consecutive points
    /// collapse to a zero-width vertex pair instead of failing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn execute(&self) -> TriangleMesh {
        let n = self.points.len();
        if n < 2 {
            return TriangleMesh::default();
        }

        let inv_last = 1.0 / (n - 1) as f64;

        let mut vertices = Vec::with_capacity(n * 2);
        let mut uvs = Vec::with_capacity(n * 2);

        for (i, p) in self.points.iter().enumerate() {
            vertices.extend(self.style.rails(p, self.tangent(i)));

            let v = i as f64 * inv_last;
            uvs.push(Point2::new(0.0, v));
            uvs.push(Point2::new(1.0, v));
        }

        let mut indices = Vec::with_capacity((n - 1) * 2);
        for i in 0..n - 1 {
            let base = (i * 2) as u32;
            indices.push([base, base + 2, base + 1]);
            indices.push([base + 2, base + 3, base + 1]);
        }

        debug!(
            points = n,
            vertices = vertices.len(),
            triangles = indices.len(),
            "ribbon tessellated"
        );

        TriangleMesh {
            vertices,
            uvs,
            indices,
        }
    }

    /// Estimates the unit tangent at point `i`.
    fn tangent(&self, i: usize) -> Vector2 {
        let n = self.points.len();
        if i == 0 {
            return self.segment_direction(0, 1);
        }
        if i == n - 1 {
            return self.segment_direction(n - 2, n - 1);
        }

        let incoming = self.segment_direction(i - 1, i);
        let outgoing = self.segment_direction(i, i + 1);
        let avg = incoming + outgoing;
        if avg.norm_squared() < REVERSAL_THRESHOLD_SQ {
            outgoing
        } else {
            normalize_or_zero(avg)
        }
    }

    /// Normalized direction from point `a` to point `b`, or zero if they
    /// coincide.
    fn segment_direction(&self, a: usize, b: usize) -> Vector2 {
        normalize_or_zero(self.points[b] - self.points[a])
    }
}
