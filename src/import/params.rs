use crate::error::{ImportError, Result};
use crate::geo::GeoOrigin;
use crate::tessellation::RibbonStyle;

/// Parameters for [`MeshFeatures`](super::MeshFeatures).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportParams {
    /// Reference point of the local planar frame.
    pub origin: GeoOrigin,
    /// Meters-to-local-unit factor applied to every generated mesh.
    pub scale: f64,
    /// Ribbon width for line features, in meters.
    pub road_width: f64,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            origin: GeoOrigin::new(52.2210, 6.8910),
            scale: 1.0,
            road_width: 6.0,
        }
    }
}

impl ImportParams {
    /// Sets the projection origin.
    #[must_use]
    pub fn with_origin(mut self, lat: f64, lon: f64) -> Self {
        self.origin = GeoOrigin::new(lat, lon);
        self
    }

    /// Sets the output scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the ribbon width for line features.
    #[must_use]
    pub fn with_road_width(mut self, road_width: f64) -> Self {
        self.road_width = road_width;
        self
    }

    /// Checks the parameters and returns the stroke style for roads.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not a positive finite number or
    /// `road_width` is not a valid stroke width.
    pub fn validate(&self) -> Result<RibbonStyle> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ImportError::InvalidParameters(format!(
                "scale must be positive, got {}",
                self.scale
            ))
            .into());
        }
        RibbonStyle::new(self.road_width)
    }
}
