pub mod error;
pub mod geo;
pub mod import;
pub mod math;
pub mod tessellation;

pub use error::{GeomeshError, Result};
