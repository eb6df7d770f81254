use thiserror::Error;

/// Top-level error type for the orientation kernel.
#[derive(Debug, Error)]
pub enum OrientisError {
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error("floorplan contains no walls")]
    EmptyFloorplan,

    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    #[error("malformed wall document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Errors raised while validating wall polygons.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("wall {wall}: expected 4 corners, found {found}")]
    CornerCount { wall: usize, found: usize },

    #[error("wall {wall}: corner {corner} has a non-finite coordinate")]
    NonFinite { wall: usize, corner: usize },

    #[error("wall {wall}: degenerate geometry: {reason}")]
    Degenerate { wall: usize, reason: String },
}

/// Errors related to caller-supplied parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("parameter {parameter} = {value} is out of range: {expected}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("unknown facing label: {0:?}")]
    UnknownFacing(String),
}

/// Convenience type alias for results using [`OrientisError`].
pub type Result<T> = std::result::Result<T, OrientisError>;
