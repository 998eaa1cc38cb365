use crate::error::{GeomeshError, Result, TessellationError};
use crate::math::polygon_2d::left_normal;
use crate::math::{Point2, Point3, Vector2};

/// Cross-section of a ribbon: a flat strip centered on the polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonStyle {
    half_width: f64,
}

impl RibbonStyle {
    /// Creates a style for a ribbon `width` units across.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not a positive finite number.
    pub fn new(width: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(TessellationError::InvalidParameters(format!(
                "ribbon width must be positive, got {width}"
            ))
            .into());
        }
        Ok(Self {
            half_width: width * 0.5,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Returns the left and right rail points for a centerline point.
    ///
    /// `tangent` is expected to be unit length or zero; a zero tangent puts
    /// both rails on the centerline.
    #[must_use]
    pub fn rails(&self, center: &Point2, tangent: Vector2) -> [Point3; 2] {
        let off = left_normal(tangent) * self.half_width;
        [
            Point3::new(center.x + off.x, center.y + off.y, 0.0),
            Point3::new(center.x - off.x, center.y - off.y, 0.0),
        ]
    }
}

impl TryFrom<f64> for RibbonStyle {
    type Error = GeomeshError;

    fn try_from(width: f64) -> Result<Self> {
        Self::new(width)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn width_round_trips_through_half_width() {
        let style = RibbonStyle::new(6.0).unwrap();
        assert_relative_eq!(style.width(), 6.0);
        assert_relative_eq!(style.half_width(), 3.0);
    }

    #[test]
    fn non_positive_or_non_finite_width_fails() {
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(RibbonStyle::new(width).is_err(), "width {width} accepted");
        }
    }

    #[test]
    fn try_from_validates() {
        assert!(RibbonStyle::try_from(2.0).is_ok());
        assert!(RibbonStyle::try_from(-2.0).is_err());
    }

    #[test]
    fn rails_straddle_the_centerline() {
        let style = RibbonStyle::new(2.0).unwrap();
        let [left, right] = style.rails(&Point2::new(5.0, 1.0), Vector2::new(0.0, 1.0));
        assert_relative_eq!(left, Point3::new(4.0, 1.0, 0.0));
        assert_relative_eq!(right, Point3::new(6.0, 1.0, 0.0));
    }

    #[test]
    fn zero_tangent_collapses_rails() {
        let style = RibbonStyle::new(2.0).unwrap();
        let [left, right] = style.rails(&Point2::new(1.0, 2.0), Vector2::zeros());
        assert_eq!(left, right);
        assert_eq!(left, Point3::new(1.0, 2.0, 0.0));
    }
}
