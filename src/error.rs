use thiserror::Error;

/// Top-level error type for the geomesh crate.
#[derive(Debug, Error)]
pub enum GeomeshError {
    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors related to feature meshing.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid import parameters: {0}")]
    InvalidParameters(String),

    #[error("feature {feature} could not be meshed: {source}")]
    Feature {
        feature: usize,
        #[source]
        source: Box<GeomeshError>,
    },
}

/// Convenience type alias for results using [`GeomeshError`].
pub type Result<T> = std::result::Result<T, GeomeshError>;
