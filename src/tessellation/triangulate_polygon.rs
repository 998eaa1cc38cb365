use tracing::{debug, warn};

use crate::math::polygon_2d::{cross_2d, point_in_triangle, signed_area_2d};
use crate::math::Point2;

/// Whether ear clipping consumed the whole ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulationStatus {
    /// Every vertex was clipped; the triangles cover the ring.
    Complete,
    /// No ear could be found before the scan budget ran out. The ring is
    /// degenerate (collinear runs, self-intersection or slivers) and the
    /// triangles only cover part of it.
    Partial,
}

/// Triangles produced by [`TriangulatePolygon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangulation {
    /// Triangle indices into the input ring. Every triangle is
    /// counter-clockwise in the plane, whatever the ring's winding.
    pub indices: Vec<[u32; 3]>,
    /// Completion status.
    pub status: TriangulationStatus,
}

impl Triangulation {
    fn empty() -> Self {
        Self {
            indices: Vec::new(),
            status: TriangulationStatus::Complete,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == TriangulationStatus::Complete
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn into_indices(self) -> Vec<[u32; 3]> {
        self.indices
    }
}

/// Number of triangles a complete triangulation of an `n`-point ring has.
#[must_use]
pub fn expected_triangle_count(n: usize) -> usize {
    n.saturating_sub(2)
}

/// Ear-clipping triangulation of a simple polygon ring without holes.
///
/// The ring is implicitly closed and may have either winding. Clockwise rings
/// are walked in reverse internally; the returned indices always refer to the
/// input order.
///
/// Remaining vertices are kept in a cyclic doubly-linked list. The scan tests
/// the vertex under the cursor as the tip of an ear, clips it if the turn is
/// strictly convex and no other remaining vertex lies inside or on the
/// candidate triangle, and then continues with the following vertex.
#[derive(Debug)]
pub struct TriangulatePolygon<'a> {
    ring: &'a [Point2],
}

impl<'a> TriangulatePolygon<'a> {
    /// Creates a new triangulation operation.
    #[must_use]
    pub fn new(ring: &'a [Point2]) -> Self {
        Self { ring }
    }

    /// Executes the triangulation.
    ///
    /// Rings with fewer than 3 points give an empty, complete result. If no
    /// ear is found within `2 × remaining` consecutive scan steps the
    /// triangles clipped so far are returned with
    /// [`TriangulationStatus::Partial`].
    ///
    /// The step budget starts at `2n` and is reset to `2 × remaining` after
    /// every clip, rather than capping the whole run at `2n` steps. A valid
    /// ring therefore always completes, however many passes its reflex
    /// vertices need, while a degenerate ring still stops after a bounded
    /// number of fruitless steps.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Triangulation {
        let n = self.ring.len();
        if n < 3 {
            return Triangulation::empty();
        }

        // Working position -> ring index, counter-clockwise.
        let order: Vec<usize> = if signed_area_2d(self.ring) > 0.0 {
            (0..n).collect()
        } else {
            (0..n).rev().collect()
        };

        let mut prev: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
        let mut next: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
        let mut remaining = n;
        let mut budget = 2 * remaining;
        let mut cur = 1;
        let mut indices = Vec::with_capacity(n - 2);

        while remaining > 2 {
            if budget == 0 {
                warn!(
                    points = n,
                    triangles = indices.len(),
                    expected = expected_triangle_count(n),
                    "ear clipping gave up on degenerate ring"
                );
                return Triangulation {
                    indices,
                    status: TriangulationStatus::Partial,
                };
            }
            budget -= 1;

            let p = prev[cur];
            let nx = next[cur];
            if self.is_ear(&order, &next, p, cur, nx) {
                indices.push([order[p] as u32, order[cur] as u32, order[nx] as u32]);
                next[p] = nx;
                prev[nx] = p;
                remaining -= 1;
                budget = 2 * remaining;
            }
            cur = nx;
        }

        debug!(points = n, triangles = indices.len(), "ring triangulated");
        Triangulation {
            indices,
            status: TriangulationStatus::Complete,
        }
    }

    /// Tests whether `(p, cur, nx)` is an ear of the remaining list.
    fn is_ear(&self, order: &[usize], next: &[usize], p: usize, cur: usize, nx: usize) -> bool {
        let a = &self.ring[order[p]];
        let b = &self.ring[order[cur]];
        let c = &self.ring[order[nx]];
        if cross_2d(a, b, c) <= 0.0 {
            return false;
        }

        let mut other = next[nx];
        while other != p {
            if point_in_triangle(&self.ring[order[other]], a, b, c) {
                return false;
            }
            other = next[other];
        }
        true
    }
}
