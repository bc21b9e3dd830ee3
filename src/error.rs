use thiserror::Error;

/// Top-level error type for the strokemesh library.
///
/// The unchecked tessellation entry points never return errors; these
/// variants are produced only by the validating entry points.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("zero-length segment between points {0} and {1}")]
    DegenerateSegment(usize, usize),
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
