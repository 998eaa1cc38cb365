mod projection;

pub use projection::{to_meters, to_meters_batch, GeoOrigin, GeoPoint, EARTH_RADIUS};
