//! Error types for isogrid.

use thiserror::Error;

use crate::grid::Axis;

/// The main error type for isogrid operations.
///
/// Every variant is a precondition failure reported before a sweep starts;
/// the sweep itself cannot fail.
#[derive(Error, Debug)]
pub enum IsogridError {
    /// A grid dimension is zero.
    #[error("grid dimension along {axis} must be positive")]
    EmptyDimension { axis: Axis },

    /// A coordinate array does not match the point count along its axis.
    #[error("{axis} coordinate array has {actual} entries, expected {expected}")]
    CoordinateLength {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// Scalar field size does not match the grid point count.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The point count does not fit in `usize`.
    #[error("grid dimensions {0:?} overflow the addressable point count")]
    DimensionOverflow([usize; 3]),

    /// Extraction options were rejected.
    #[error("invalid extraction option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for isogrid operations.
pub type Result<T> = std::result::Result<T, IsogridError>;
