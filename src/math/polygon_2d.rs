use super::{Point2, Vector2, TOLERANCE};

/// Vectors shorter than this normalize to zero instead of blowing up.
const NORMALIZE_EPSILON: f64 = 1e-5;

/// Computes the signed area of a ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Twice the signed area of triangle `abc`, i.e. `(b - a) × (c - a)`.
///
/// Positive when `a → b → c` turns counter-clockwise.
#[must_use]
pub fn cross_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Returns `true` if `p` lies inside or on the boundary of the
/// counter-clockwise triangle `abc`.
#[must_use]
pub fn point_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    cross_2d(a, b, p) >= 0.0 && cross_2d(b, c, p) >= 0.0 && cross_2d(c, a, p) >= 0.0
}

/// Normalizes `v`, returning the zero vector when it is too short to have a
/// meaningful direction.
#[must_use]
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len > NORMALIZE_EPSILON {
        v / len
    } else {
        Vector2::zeros()
    }
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Drops the explicit closing point of a ring if it repeats the first one.
#[must_use]
pub fn open_ring(points: &[Point2]) -> &[Point2] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && (first - last).norm() < TOLERANCE => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_far_from_origin() {
        // Large offsets must not swamp a small footprint.
        let pts: Vec<Point2> = unit_square()
            .iter()
            .map(|p| Point2::new(p.x + 1.0e6, p.y + 5.0e6))
            .collect();
        let area = signed_area_2d(&pts);
        assert!((area - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cross_sign_follows_turn() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(cross_2d(&a, &b, &Point2::new(1.0, 1.0)) > 0.0);
        assert!(cross_2d(&a, &b, &Point2::new(1.0, -1.0)) < 0.0);
        assert!(cross_2d(&a, &b, &Point2::new(2.0, 0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn point_in_triangle_inclusive() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(point_in_triangle(&Point2::new(1.0, 1.0), &a, &b, &c));
        // On an edge and on a corner both count as inside.
        assert!(point_in_triangle(&Point2::new(2.0, 0.0), &a, &b, &c));
        assert!(point_in_triangle(&Point2::new(2.0, 2.0), &a, &b, &c));
        assert!(point_in_triangle(&b, &a, &b, &c));
        assert!(!point_in_triangle(&Point2::new(3.0, 3.0), &a, &b, &c));
        assert!(!point_in_triangle(&Point2::new(-0.1, 1.0), &a, &b, &c));
    }

    #[test]
    fn normalize_short_vector_is_zero() {
        let v = normalize_or_zero(Vector2::new(1e-7, 0.0));
        assert!(v.norm() < TOLERANCE);
        let v = normalize_or_zero(Vector2::new(3.0, 4.0));
        assert!((v.x - 0.6).abs() < TOLERANCE);
        assert!((v.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert!((n.x).abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn open_ring_drops_closing_point() {
        let mut pts = unit_square();
        pts.push(pts[0]);
        assert_eq!(open_ring(&pts).len(), 4);
        assert_eq!(open_ring(&unit_square()).len(), 4);
        assert!(open_ring(&[]).is_empty());
        assert_eq!(open_ring(&[Point2::new(1.0, 1.0)]).len(), 1);
    }
}
