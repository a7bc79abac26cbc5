//! Error types for fungi_core.
//!
//! The transition rule is total, so every error here comes from sizing
//! or allocating the grids before a run starts.

use thiserror::Error;

/// Main error type for fungi_core operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A grid dimension was zero
    #[error("{axis} must be a positive nonzero integer")]
    ZeroDimension { axis: &'static str },

    /// Bordered size does not fit in memory addressing
    #[error("grid of {rows}x{columns} cells is too large to address")]
    GridTooLarge { rows: usize, columns: usize },

    /// The allocator refused the grid buffer
    #[error("failed to allocate {cells} grid cells")]
    Allocation { cells: usize },

    /// Supplied cell list does not match the interior size
    #[error("expected {expected} interior cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for fungi_core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new invalid-configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
