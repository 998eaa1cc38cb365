use crate::math::Point2;

/// Equatorial Earth radius in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a point from a GeoJSON-ordered `[lon, lat]` pair.
    #[must_use]
    pub fn from_lon_lat(coord: [f64; 2]) -> Self {
        Self {
            lat: coord[1],
            lon: coord[0],
        }
    }
}

/// Projects a geographic coordinate to planar meters relative to an origin.
///
/// Equirectangular approximation: longitude deltas are scaled by the cosine
/// of the origin latitude. Only accurate for extents that are small relative
/// to the Earth's radius. No range validation is performed.
#[must_use]
pub fn to_meters(lat: f64, lon: f64, origin_lat: f64, origin_lon: f64) -> Point2 {
    let east = EARTH_RADIUS * (lon - origin_lon).to_radians() * origin_lat.to_radians().cos();
    let north = EARTH_RADIUS * (lat - origin_lat).to_radians();
    Point2::new(east, north)
}

/// Projects a sequence of `[lon, lat]` pairs, preserving length and order.
#[must_use]
pub fn to_meters_batch(coords: &[[f64; 2]], origin_lat: f64, origin_lon: f64) -> Vec<Point2> {
    coords
        .iter()
        .map(|&[lon, lat]| to_meters(lat, lon, origin_lat, origin_lon))
        .collect()
}

/// The reference point of a local planar frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoOrigin {
    origin: GeoPoint,
}

impl GeoOrigin {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            origin: GeoPoint::new(lat, lon),
        }
    }

    /// Returns the origin coordinate.
    #[must_use]
    pub fn point(&self) -> GeoPoint {
        self.origin
    }

    /// Projects a single coordinate into this frame.
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> Point2 {
        to_meters(point.lat, point.lon, self.origin.lat, self.origin.lon)
    }

    /// Projects `[lon, lat]` pairs into this frame.
    #[must_use]
    pub fn project_lon_lat(&self, coords: &[[f64; 2]]) -> Vec<Point2> {
        to_meters_batch(coords, self.origin.lat, self.origin.lon)
    }
}
